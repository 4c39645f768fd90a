//! Run-length compression of probe results into report lines.
//!
//! Results are sorted by port and folded into maximal runs of contiguous
//! ports sharing one classification. A run prints as `port: Class` when it
//! covers one port and `start - end: Class` otherwise.

use crate::scanner::{Classification, ProbeResult};
use crate::types::Port;
use serde::Serialize;
use std::fmt;

/// A maximal run of contiguous ports with the same classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortRun {
    pub start: Port,
    pub end: Port,
    pub classification: Classification,
}

impl PortRun {
    fn open_at(result: &ProbeResult) -> Self {
        Self {
            start: result.port,
            end: result.port,
            classification: result.classification,
        }
    }

    /// Whether `result` continues this run.
    fn extends_with(&self, result: &ProbeResult) -> bool {
        result.classification == self.classification && self.end.next() == Some(result.port)
    }
}

impl fmt::Display for PortRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}: {}", self.start, self.classification)
        } else {
            write!(f, "{} - {}: {}", self.start, self.end, self.classification)
        }
    }
}

/// Compress results into runs, ordered by port.
///
/// The input may be in any order; it is not modified.
pub fn compress(results: &[ProbeResult]) -> Vec<PortRun> {
    let mut sorted = results.to_vec();
    sorted.sort_by_key(|r| r.port);

    let mut runs: Vec<PortRun> = Vec::new();
    for result in &sorted {
        match runs.last_mut() {
            Some(run) if run.extends_with(result) => run.end = result.port,
            _ => runs.push(PortRun::open_at(result)),
        }
    }
    runs
}
