//! Monte Carlo pricing model.
//!
//! [`MonteCarloModel`] owns one contract, one configuration and, after
//! [`simulate`](MonteCarloModel::simulate), one [`PathMatrix`]. Prices are
//! read from the terminal row of that matrix:
//!
//! ```text
//! C = e^(-rT) · mean(max(S_T - K, 0))
//! P = e^(-rT) · mean(max(K - S_T, 0))
//! ```
//!
//! Pricing before the first simulation fails with
//! [`PricingError::NotSimulated`].

use pricer_core::traits::PricingModel;
use pricer_core::types::{OptionContract, OptionSide, PricingError};
use tracing::debug;

use super::config::MonteCarloConfig;
use super::paths::{generate_gbm_paths, GbmParams, PathMatrix};
use crate::rng::PricerRng;

/// Monte Carlo price estimate with its sampling error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::McEstimate;
///
/// let estimate = McEstimate { price: 10.5, std_error: 0.05, n_paths: 100_000 };
/// assert!((estimate.confidence_95() - 0.098).abs() < 1e-12);
/// let (low, high) = estimate.interval_95();
/// assert!(low < 10.5 && high > 10.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Sample standard deviation of discounted payoffs over √N.
    pub std_error: f64,
    /// Number of paths averaged.
    pub n_paths: usize,
}

impl McEstimate {
    /// Half-width of the 95% confidence interval (1.96 standard errors).
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// The 95% confidence interval `(low, high)`.
    #[inline]
    pub fn interval_95(&self) -> (f64, f64) {
        let half = self.confidence_95();
        (self.price - half, self.price + half)
    }
}

/// Monte Carlo model for a single European contract.
///
/// Simulates `n_paths` GBM paths with one step per calendar day to
/// maturity. The path matrix is owned by the model and replaced on every
/// call to [`simulate`](Self::simulate).
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::{OptionContract, PricingError};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloModel};
///
/// let contract = OptionContract::from_days(100.0, 100.0, 30, 0.05, 0.2).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(2_000).seed(42).build().unwrap();
/// let mut model = MonteCarloModel::new(contract, config).unwrap();
///
/// assert_eq!(model.price_call(), Err(PricingError::NotSimulated));
///
/// model.simulate();
/// let call = model.price_call().unwrap();
/// assert!(call > 0.0);
/// assert_eq!(model.paths().unwrap().seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloModel {
    contract: OptionContract,
    config: MonteCarloConfig,
    n_steps: usize,
    paths: Option<PathMatrix>,
}

impl MonteCarloModel {
    /// Creates a model; no paths are generated yet.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` if the configuration is invalid or the
    /// path matrix for this contract would be too large.
    pub fn new(contract: OptionContract, config: MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate()?;
        let n_steps = contract.calendar_days();
        config.validate_steps(n_steps)?;

        Ok(Self {
            contract,
            config,
            n_steps,
            paths: None,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Number of time steps per path (calendar days to maturity).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Whether [`simulate`](Self::simulate) has been called.
    #[inline]
    pub fn is_simulated(&self) -> bool {
        self.paths.is_some()
    }

    /// The simulated paths, if any.
    #[inline]
    pub fn paths(&self) -> Option<&PathMatrix> {
        self.paths.as_ref()
    }

    /// Generates a fresh path matrix.
    ///
    /// Uses the configured seed, or a seed drawn from OS entropy when none is
    /// configured. The seed actually used is recorded on the matrix.
    pub fn simulate(&mut self) -> &PathMatrix {
        let seed = self
            .config
            .seed()
            .unwrap_or_else(|| PricerRng::from_entropy().seed());
        self.simulate_with_seed(seed)
    }

    /// Generates a fresh path matrix from an explicit seed.
    pub fn simulate_with_seed(&mut self, seed: u64) -> &PathMatrix {
        let parallel = self.config.use_parallel();
        debug!(
            n_paths = self.config.n_paths(),
            n_steps = self.n_steps,
            seed,
            parallel,
            "Generating GBM paths"
        );

        let matrix = generate_gbm_paths(
            GbmParams::from_contract(&self.contract),
            self.config.n_paths(),
            self.n_steps,
            seed,
            parallel,
        );
        self.paths.insert(matrix)
    }

    /// Price, standard error and path count for one side.
    ///
    /// # Errors
    ///
    /// - `PricingError::NotSimulated` before the first simulation
    /// - `PricingError::NumericalInstability` if the estimate is not finite
    pub fn estimate(&self, side: OptionSide) -> Result<McEstimate, PricingError> {
        let paths = self.paths.as_ref().ok_or(PricingError::NotSimulated)?;
        let strike = self.contract.strike();
        let discount = self.contract.discount_factor();

        // Welford's running mean and variance
        let (mut mean, mut m2, mut n) = (0.0_f64, 0.0_f64, 0usize);
        for s_t in paths.terminal() {
            n += 1;
            let x = discount * side.payoff(s_t, strike);
            let delta = x - mean;
            mean += delta / n as f64;
            m2 += delta * (x - mean);
        }

        let std_error = if n > 1 {
            (m2 / (n - 1) as f64).sqrt() / (n as f64).sqrt()
        } else {
            0.0
        };

        Ok(McEstimate {
            price: PricingError::ensure_finite("Monte Carlo price", mean)?,
            std_error: PricingError::ensure_finite("Monte Carlo standard error", std_error)?,
            n_paths: n,
        })
    }
}

impl PricingModel for MonteCarloModel {
    fn contract(&self) -> &OptionContract {
        &self.contract
    }

    fn price_call(&self) -> Result<f64, PricingError> {
        self.estimate(OptionSide::Call).map(|e| e.price)
    }

    fn price_put(&self) -> Result<f64, PricingError> {
        self.estimate(OptionSide::Put).map(|e| e.price)
    }
}
