//! TCP connect prober.
//!
//! Uses the operating system's socket API to attempt a full TCP handshake
//! and classifies the outcome from the typed error kind.

use crate::scanner::traits::{Classification, ProbeResult, Prober};
use crate::types::Port;
use async_trait::async_trait;
use std::future::Future;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Default per-probe connection timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// TCP connect prober.
///
/// Does not require elevated privileges. Connections that succeed are
/// closed as soon as the outcome is known.
pub struct TcpConnectProber {
    target: IpAddr,
    timeout: Duration,
}

impl TcpConnectProber {
    /// Create a new TCP connect prober.
    ///
    /// # Arguments
    /// * `target` - Target IP address to probe
    /// * `timeout` - Connection timeout per port
    pub fn new(target: IpAddr, timeout: Duration) -> Self {
        Self { target, timeout }
    }
}

#[async_trait]
impl Prober for TcpConnectProber {
    fn target(&self) -> IpAddr {
        self.target
    }

    async fn probe(&self, port: Port) -> ProbeResult {
        let addr = SocketAddr::new(self.target, port.as_u16());
        let classification = classify_attempt(self.timeout, TcpStream::connect(addr)).await;
        debug!(%addr, %classification, "probe finished");
        ProbeResult::new(port, classification)
    }
}

/// Drive a connection attempt under a deadline and classify its outcome.
///
/// An established connection is dropped before returning.
pub async fn classify_attempt<F, S>(deadline: Duration, connect: F) -> Classification
where
    F: Future<Output = io::Result<S>>,
{
    match timeout(deadline, connect).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Classification::Open
        }
        Ok(Err(e)) => classify_connect_error(&e),
        Err(_elapsed) => Classification::Blocked,
    }
}

/// Map a failed connect to a classification by its error kind.
pub fn classify_connect_error(err: &io::Error) -> Classification {
    match err.kind() {
        io::ErrorKind::TimedOut => Classification::Blocked,
        io::ErrorKind::ConnectionRefused => Classification::Closed,
        _ => Classification::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    fn localhost() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    #[test]
    fn test_prober_creation() {
        let prober = TcpConnectProber::new(localhost(), DEFAULT_TIMEOUT);
        assert_eq!(prober.target(), localhost());
        assert_eq!(prober.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_error_kind_mapping() {
        let refused = io::Error::from(io::ErrorKind::ConnectionRefused);
        assert_eq!(classify_connect_error(&refused), Classification::Closed);

        let timed_out = io::Error::from(io::ErrorKind::TimedOut);
        assert_eq!(classify_connect_error(&timed_out), Classification::Blocked);

        let reset = io::Error::from(io::ErrorKind::ConnectionReset);
        assert_eq!(classify_connect_error(&reset), Classification::Unknown);

        let other = io::Error::new(io::ErrorKind::Other, "network is unreachable");
        assert_eq!(classify_connect_error(&other), Classification::Unknown);
    }

    #[tokio::test]
    async fn test_deadline_elapsing_is_blocked() {
        let never = std::future::pending::<io::Result<()>>();
        let classification = classify_attempt(Duration::from_millis(20), never).await;
        assert_eq!(classification, Classification::Blocked);
    }

    #[tokio::test]
    async fn test_probe_open_port() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let port = Port::new(listener.local_addr().unwrap().port()).unwrap();

        let prober = TcpConnectProber::new(localhost(), DEFAULT_TIMEOUT);
        let result = prober.probe(port).await;

        assert_eq!(result.port, port);
        assert_eq!(result.classification, Classification::Open);
    }

    #[tokio::test]
    async fn test_open_connection_is_released() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let port = Port::new(listener.local_addr().unwrap().port()).unwrap();

        let prober = TcpConnectProber::new(localhost(), DEFAULT_TIMEOUT);
        let result = prober.probe(port).await;
        assert_eq!(result.classification, Classification::Open);

        // The prober has already closed its end, so the server side sees EOF.
        let (mut server, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 16];
        let read = timeout(Duration::from_secs(1), server.read(&mut buf))
            .await
            .expect("connection left open after probe")
            .unwrap();
        assert_eq!(read, 0);
    }

    #[tokio::test]
    async fn test_probe_closed_port() {
        // Grab a free port, then release it so nothing listens there.
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let port = Port::new(listener.local_addr().unwrap().port()).unwrap();
        drop(listener);

        let prober = TcpConnectProber::new(localhost(), DEFAULT_TIMEOUT);
        let result = prober.probe(port).await;

        assert_eq!(result.classification, Classification::Closed);
    }

    #[tokio::test]
    #[ignore]
    async fn test_probe_black_holed_destination() {
        // TEST-NET-1 is not routed; the connect should stall until the deadline.
        let prober = TcpConnectProber::new(
            IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)),
            Duration::from_millis(500),
        );
        let result = prober.probe(Port::new(80).unwrap()).await;
        assert_eq!(result.classification, Classification::Blocked);
    }
}
