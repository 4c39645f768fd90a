//! Output formatting module.
//!
//! Provides the progress display and the plain text and JSON renderings of
//! the compressed report.

mod json_format;
mod plain;
mod progress;

pub use json_format::{print_json, write_json};
pub use plain::{print_error, print_plain, print_scan_header, scan_header, write_plain};
pub use progress::ScanProgressBar;

use crate::cli::OutputFormat;
use crate::report::PortRun;
use std::io;

/// Format and print the report according to the specified format.
pub fn print_report(runs: &[PortRun], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(runs),
        OutputFormat::Json => print_json(runs),
    }
}
