//! Error types for the `pricer` binary.

use pricer_core::types::PricingError;
use pricer_pricing::mc::ConfigError as EngineConfigError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment problem
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing model rejected its inputs
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument combination or value not usable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed input data
    #[error("Parse error: {0}")]
    Parse(String),

    /// CSV read or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<EngineConfigError> for CliError {
    fn from(err: EngineConfigError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
