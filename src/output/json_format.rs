//! JSON output formatting.

use crate::report::PortRun;
use std::io::{self, Write};

/// Write the runs as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, runs: &[PortRun]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, runs)?;
    writeln!(out)
}

/// Print results in JSON format.
pub fn print_json(runs: &[PortRun]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, runs)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::compress;
    use crate::scanner::{Classification, ProbeResult};
    use crate::types::Port;

    #[test]
    fn test_write_json() {
        let runs = compress(&[
            ProbeResult::new(Port::new(22).unwrap(), Classification::Blocked),
            ProbeResult::new(Port::new(23).unwrap(), Classification::Blocked),
        ]);
        let mut buf = Vec::new();
        write_json(&mut buf, &runs).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "start": 22, "end": 23, "classification": "Blocked" }])
        );
    }
}
