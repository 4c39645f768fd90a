//! # Portsniffer - TCP Port Reachability Probing
//!
//! Portsniffer probes the TCP ports of a single host, classifies each as
//! open, closed, blocked or unknown, and reports contiguous port ranges
//! that share a classification.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portsniffer::report::compress;
//! use portsniffer::scanner::{ScanJob, TcpConnectProber};
//! use portsniffer::types::PortSelection;
//! use std::net::IpAddr;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let target: IpAddr = "192.168.1.1".parse().unwrap();
//!     let prober = TcpConnectProber::new(target, Duration::from_secs(1));
//!     let ports = PortSelection::Common.ports();
//!
//!     let results = ScanJob::new(prober, ports)
//!         .run(|p| eprintln!("{}/{}", p.completed, p.total))
//!         .await;
//!
//!     for run in compress(&results.results) {
//!         println!("{}", run);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Ports, ranges, selection modes and targets
//! - [`scanner`] - The `Prober` trait, TCP connect prober and batch engine
//! - [`report`] - Run-length compression of results into report lines
//! - [`config`] - Settings file handling
//! - [`output`] - Progress display and report rendering
//! - [`cli`] - Command-line front end
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError};
pub use report::{compress, PortRun};
pub use scanner::{Classification, ProbeResult, Prober, ScanJob};
pub use types::{Port, PortRange, PortSelection, ScanTarget, TargetSpec};
