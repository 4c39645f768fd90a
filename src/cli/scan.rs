//! Scan execution.
//!
//! Validates the command line, probes the selected ports and prints the
//! compressed report.

use super::{Cli, OutputFormat};
use crate::error::CliResult;
use crate::output::{self, ScanProgressBar};
use crate::report::{compress, PortRun};
use crate::scanner::{ScanJob, TcpConnectProber};
use crate::types::TargetSpec;
use tracing::info;

/// Run the scan described by `cli` and return the compressed report.
///
/// All configuration is validated and the host resolved before any
/// probing starts.
pub async fn scan_runs(cli: &Cli) -> CliResult<Vec<PortRun>> {
    let host = cli.host()?;
    let selection = cli.selection()?;
    let settings = cli.settings()?;

    let target = TargetSpec::parse(host)?.resolve().await?;
    let ports = selection.ports();

    // Keep stdout parseable for JSON output
    if !cli.quiet && cli.output == OutputFormat::Plain {
        output::print_scan_header(&target, &selection);
    }
    info!(
        host = %target,
        %selection,
        batch_size = settings.batch_size,
        timeout_ms = settings.timeout_ms,
        "sniffing"
    );

    let show_progress = !cli.quiet && ports.len() > 1;
    let progress = ScanProgressBar::new(ports.len(), show_progress);

    let prober = TcpConnectProber::new(target.ip, settings.timeout());
    let results = ScanJob::new(prober, ports)
        .with_batch_size(settings.batch_size)
        .run(|p| progress.update(p))
        .await;

    progress.finish();

    Ok(compress(&results.results))
}

/// Run the scan and print the report.
pub async fn execute(cli: &Cli) -> CliResult<()> {
    let runs = scan_runs(cli).await?;
    output::print_report(&runs, cli.output)?;
    Ok(())
}
