//! Prober trait abstraction.
//!
//! Defines the classification model and a common interface for probe
//! implementations, so the batch engine can be driven by fakes in tests.

use crate::types::Port;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Reachability of a probed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// Connection established.
    Open,
    /// The remote stack refused the connection.
    Closed,
    /// No answer before the deadline, likely filtered by a firewall.
    Blocked,
    /// Any other connection failure.
    Unknown,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
            Self::Blocked => write!(f, "Blocked"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Outcome of probing a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// The port number that was probed.
    pub port: Port,
    /// Reachability determined by the probe.
    pub classification: Classification,
}

impl ProbeResult {
    pub fn new(port: Port, classification: Classification) -> Self {
        Self {
            port,
            classification,
        }
    }
}

/// Trait for port probe implementations.
///
/// A probe never fails: every network outcome is folded into a
/// [`Classification`].
///
/// # Example
///
/// ```ignore
/// use portsniffer::scanner::{Prober, ProbeResult};
///
/// async fn probe<P: Prober>(prober: &P, port: Port) -> ProbeResult {
///     prober.probe(port).await
/// }
/// ```
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single port.
    async fn probe(&self, port: Port) -> ProbeResult;

    /// Get the target IP address.
    fn target(&self) -> IpAddr;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Open.to_string(), "Open");
        assert_eq!(Classification::Closed.to_string(), "Closed");
        assert_eq!(Classification::Blocked.to_string(), "Blocked");
        assert_eq!(Classification::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_probe_result() {
        let port = Port::new(80).unwrap();
        let result = ProbeResult::new(port, Classification::Blocked);
        assert_eq!(result.port, port);
        assert_eq!(result.classification, Classification::Blocked);
    }

    #[test]
    fn test_classification_serialization() {
        let json = serde_json::to_string(&Classification::Blocked).unwrap();
        assert_eq!(json, "\"Blocked\"");
    }
}
