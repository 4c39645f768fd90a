//! Error types for Portsniffer.
//!
//! Uses `thiserror` for ergonomic error definitions. Per-port network
//! failures are never errors: the prober folds them into a
//! [`Classification`](crate::scanner::Classification).

use crate::types::{PortError, TargetError};
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when no target host was supplied.
pub const EXIT_MISSING_TARGET: u8 = 111;

/// Configuration errors. Always fatal, raised before any probing starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("we need an address to sniff (use --domain or --ip)")]
    MissingTarget,

    #[error("invalid port range: {0}")]
    InvalidRange(String),

    #[error("invalid port: {0}")]
    InvalidPort(String),

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("timeout must be at least 1 millisecond")]
    InvalidTimeout,

    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("could not determine configuration directory")]
    DirectoryNotFound,
}

impl From<PortError> for ConfigError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::InvalidRange(_) => Self::InvalidRange(err.to_string()),
            _ => Self::InvalidPort(err.to_string()),
        }
    }
}

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(ConfigError::MissingTarget) => EXIT_MISSING_TARGET,
            _ => 1,
        }
    }
}

/// Result type alias for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
