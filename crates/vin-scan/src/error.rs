//! Scanner Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the scanning harness itself. Invalid VINs are never errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Input file could not be read
    #[error("Failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Report could not be written
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
