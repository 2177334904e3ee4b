//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation
//! in the Monte Carlo simulation engine.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_MATRIX_ENTRIES, MAX_PATHS};

/// Configuration error for the Monte Carlo model.
///
/// These errors occur when invalid parameters are provided, either at
/// build time or when the contract's step count is known at simulation.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingError;
/// use pricer_pricing::mc::ConfigError;
///
/// let err = ConfigError::InvalidPathCount(0);
/// assert!(err.to_string().contains("Invalid path count 0"));
///
/// let pricing: PricingError = err.into();
/// assert!(matches!(pricing, PricingError::InvalidInput(_)));
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Zero step count (contract expires today).
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Path matrix would exceed the memory budget.
    #[error(
        "Path matrix too large: {n_paths} paths x {n_rows} rows exceeds {max} entries",
        max = MAX_MATRIX_ENTRIES
    )]
    MatrixTooLarge {
        /// Requested path count.
        n_paths: usize,
        /// Rows per path (steps + 1).
        n_rows: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
