//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for Monte Carlo
//! pricing simulations. The step count is not configured here: it is the
//! contract's calendar days to maturity.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of entries in one path matrix (1.6 GB of f64).
///
/// This is the only bound on the step count: long-dated contracts are
/// accepted as long as `n_paths × (n_steps + 1)` fits.
pub const MAX_MATRIX_ENTRIES: usize = 200_000_000;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 10_000;

/// Default path count at which parallel generation kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional seed for reproducibility; `None` draws from entropy.
    seed: Option<u64>,
    /// Whether path generation may use the rayon thread pool.
    parallel: bool,
    /// Minimum path count for parallel generation.
    parallel_threshold: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: None,
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether parallel generation is enabled.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the minimum path count for parallel generation.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Whether a simulation should run on the thread pool.
    #[inline]
    pub fn use_parallel(&self) -> bool {
        self.parallel && self.n_paths >= self.parallel_threshold
    }

    /// Returns a copy with a different seed.
    #[inline]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `parallel_threshold` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.parallel_threshold == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "parallel_threshold",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Validates a step count against this configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidStepCount` if `n_steps` is 0
    /// - `ConfigError::MatrixTooLarge` if the path matrix would exceed
    ///   [`MAX_MATRIX_ENTRIES`]
    pub fn validate_steps(&self, n_steps: usize) -> Result<(), ConfigError> {
        if n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(n_steps));
        }
        let n_rows = n_steps + 1;
        match self.n_paths.checked_mul(n_rows) {
            Some(entries) if entries <= MAX_MATRIX_ENTRIES => Ok(()),
            _ => Err(ConfigError::MatrixTooLarge {
                n_paths: self.n_paths,
                n_rows,
            }),
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .parallel(false)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.seed(), None);
/// assert!(!config.use_parallel());
///
/// assert!(MonteCarloConfig::builder().n_paths(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    parallel: Option<bool>,
    parallel_threshold: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel path generation.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Sets the minimum path count for parallel generation.
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let defaults = MonteCarloConfig::default();
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            seed: self.seed,
            parallel: self.parallel.unwrap_or(defaults.parallel),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };
        config.validate()?;
        Ok(config)
    }
}
