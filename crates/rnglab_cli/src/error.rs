//! Error types for the rnglab CLI.

use rnglab_core::LabError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator or histogram error
    #[error("Laboratory error: {0}")]
    Lab(#[from] LabError),

    /// Console IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging initialisation error
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
