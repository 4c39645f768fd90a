//! Plain text output formatting.
//!
//! Report lines are written verbatim; status messages are styled.

use crate::report::PortRun;
use crate::types::{PortSelection, ScanTarget};
use console::style;
use std::io::{self, Write};

/// Write one `port: Class` / `start - end: Class` line per run.
pub fn write_plain<W: Write>(out: &mut W, runs: &[PortRun]) -> io::Result<()> {
    for run in runs {
        writeln!(out, "{}", run)?;
    }
    Ok(())
}

/// Print results in plain text to stdout.
pub fn print_plain(runs: &[PortRun]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, runs)?;
    out.flush()
}

/// The line announcing what is about to be probed.
pub fn scan_header(target: &ScanTarget, selection: &PortSelection) -> String {
    match selection {
        PortSelection::Single(port) => format!("Sniffing port {} on {}", port, target),
        PortSelection::Range(range) => {
            format!("Sniffing a range of ports ({}) on {}", range, target)
        }
        PortSelection::Common => format!("Sniffing common ports on {}", target),
    }
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(target: &ScanTarget, selection: &PortSelection) {
    println!("{}", style(scan_header(target, selection)).cyan());
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
