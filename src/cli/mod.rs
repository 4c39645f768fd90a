//! Command-line interface definitions for Portsniffer.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flag names
//! follow the classic portsniffer interface: `-d`/`--ip` for the host and
//! `-p`, `--pr`, `--pc` for the three port selection modes.

mod scan;

pub use scan::{execute, scan_runs};

use crate::config::AppSettings;
use crate::error::{ConfigError, ConfigResult};
use crate::types::PortSelection;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing::warn;

/// Probe TCP ports on a host and report which are open, closed or blocked.
#[derive(Parser, Debug)]
#[command(name = "portsniffer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sniff the TCP ports of a host", long_about = None)]
#[command(group(ArgGroup::new("host").args(["domain", "ip"])))]
#[command(group(ArgGroup::new("selection").args(["port", "range", "common"])))]
pub struct Cli {
    /// Domain name to sniff
    #[arg(short = 'd', long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// IP address to sniff
    #[arg(long, value_name = "ADDR")]
    pub ip: Option<String>,

    /// Check one port (443 when no selection is given)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Check a port range, written as START-END (e.g. 80-443)
    #[arg(long, visible_alias = "pr", value_name = "START-END", allow_hyphen_values = true)]
    pub range: Option<String>,

    /// Check the common ports
    #[arg(long, visible_alias = "pc")]
    pub common: bool,

    /// Number of ports probed concurrently per batch
    #[arg(short = 'b', long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Connection timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the header and progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The host to probe, as given on the command line.
    pub fn host(&self) -> ConfigResult<&str> {
        self.domain
            .as_deref()
            .or(self.ip.as_deref())
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::MissingTarget)
    }

    /// The active port selection mode.
    pub fn selection(&self) -> ConfigResult<PortSelection> {
        Ok(PortSelection::resolve(
            self.port,
            self.range.as_deref(),
            self.common,
        )?)
    }

    /// Settings from file (explicit or default location) with flag overrides.
    pub fn settings(&self) -> ConfigResult<AppSettings> {
        let base = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => match AppSettings::load() {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(error = %e, "ignoring settings file");
                    AppSettings::default()
                }
            },
        };

        let settings = base.with_overrides(self.batch_size, self.timeout);
        settings.validate()?;
        Ok(settings)
    }
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `port: Class` or `start - end: Class` line per run
    #[default]
    Plain,
    /// JSON array of runs
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
