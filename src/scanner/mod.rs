//! Scanner module - the batched probe engine.
//!
//! Ports are probed in fixed-size batches. Each batch runs as independent
//! tokio tasks and is joined as a whole before the next batch starts, so the
//! number of simultaneous outbound connections never exceeds the batch size.

pub mod tcp;
pub mod traits;

use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::types::Port;

pub use tcp::{classify_attempt, classify_connect_error, TcpConnectProber, DEFAULT_TIMEOUT};
pub use traits::{Classification, ProbeResult, Prober};

/// Default number of concurrent probes per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Progress snapshot reported after each completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Ports probed so far.
    pub completed: usize,
    /// Ports requested in total.
    pub total: usize,
}

/// Complete scan results, unordered.
#[derive(Debug, Clone)]
pub struct ScanResults {
    /// One entry per requested port, in completion order.
    pub results: Vec<ProbeResult>,
}

/// A scan over an ordered list of ports.
///
/// The job owns its result buffer. [`ScanJob::next_batch`] advances one
/// batch at a time; [`ScanJob::run`] drives every batch and reports progress
/// between them.
pub struct ScanJob<P> {
    prober: Arc<P>,
    ports: Vec<Port>,
    batch_size: usize,
    results: Vec<ProbeResult>,
    started: Option<Instant>,
}

impl<P: Prober + 'static> ScanJob<P> {
    /// Create a job probing `ports` in order with the default batch size.
    pub fn new(prober: P, ports: Vec<Port>) -> Self {
        let capacity = ports.len();
        Self {
            prober: Arc::new(prober),
            ports,
            batch_size: DEFAULT_BATCH_SIZE,
            results: Vec::with_capacity(capacity),
            started: None,
        }
    }

    /// Set the number of concurrent probes per batch (at least 1).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn progress(&self) -> ScanProgress {
        ScanProgress {
            completed: self.results.len(),
            total: self.ports.len(),
        }
    }

    /// Probe the next batch and wait for every probe in it to finish.
    ///
    /// Returns the batch's results, or `None` once all ports are done.
    pub async fn next_batch(&mut self) -> Option<&[ProbeResult]> {
        let offset = self.results.len();
        if offset >= self.ports.len() {
            return None;
        }
        self.started.get_or_insert_with(Instant::now);

        let end = (offset + self.batch_size).min(self.ports.len());
        let tasks = self.ports[offset..end].iter().map(|&port| {
            let prober = Arc::clone(&self.prober);
            let handle = tokio::spawn(async move { prober.probe(port).await });
            async move {
                match handle.await {
                    Ok(result) => result,
                    Err(e) => {
                        warn!(%port, error = %e, "probe task failed");
                        ProbeResult::new(port, Classification::Unknown)
                    }
                }
            }
        });

        let batch = join_all(tasks).await;
        self.results.extend(batch);

        let progress = self.progress();
        info!(
            completed = progress.completed,
            total = progress.total,
            "batch complete"
        );

        Some(&self.results[offset..])
    }

    /// Run every remaining batch, invoking `on_batch` after each one.
    pub async fn run<F>(mut self, mut on_batch: F) -> ScanResults
    where
        F: FnMut(ScanProgress),
    {
        info!(
            host = %self.prober.target(),
            ports = self.ports.len(),
            batch_size = self.batch_size,
            "starting scan"
        );

        while self.next_batch().await.is_some() {
            on_batch(self.progress());
        }

        let duration = self.started.map(|s| s.elapsed()).unwrap_or_default();
        info!(ports = self.results.len(), ?duration, "scan complete");

        ScanResults {
            results: self.results,
        }
    }
}
