//! Portsniffer - a batched TCP port prober.

use clap::{CommandFactory, Parser};
use portsniffer::cli::{self, Cli};
use portsniffer::error::CliError;
use portsniffer::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match cli::execute(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            if matches!(e, CliError::Config(_)) {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
