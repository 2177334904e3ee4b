//! Monte Carlo pricing of European options under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloModel
//! ├── OptionContract    (spot, strike, maturity, rate, volatility)
//! ├── MonteCarloConfig  (paths, seed, parallelism)
//! └── PathMatrix        (owned, replaced by simulate())
//!     └── generate_gbm_paths()
//!         └── PricerRng::for_stream(seed, path)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::traits::PricingModel;
//! use pricer_core::types::{OptionContract, OptionSide};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloModel};
//!
//! let contract = OptionContract::from_days(100.0, 100.0, 90, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(5_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut model = MonteCarloModel::new(contract, config).unwrap();
//! model.simulate();
//!
//! let estimate = model.estimate(OptionSide::Call).unwrap();
//! assert!(estimate.std_error > 0.0);
//! assert_eq!(model.price_call().unwrap(), estimate.price);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_PATHS,
    MAX_MATRIX_ENTRIES, MAX_PATHS,
};
pub use error::ConfigError;
pub use paths::{generate_gbm_paths, GbmParams, PathMatrix};
pub use pricer::{McEstimate, MonteCarloModel};
