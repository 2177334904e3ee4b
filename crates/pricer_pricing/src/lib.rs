//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing provides the stochastic pricing engine of the workspace:
//! - Seeded random number generation with per-path streams (`rng`)
//! - Geometric Brownian Motion path generation, sequential or on rayon (`mc::paths`)
//! - The Monte Carlo model with price, standard error and confidence
//!   interval (`mc::pricer`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::traits::PricingModel;
//! use pricer_core::types::{OptionContract, OptionSide};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloModel};
//!
//! let contract = OptionContract::new(100.0, 100.0, 0.25, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder().n_paths(4_000).seed(7).build().unwrap();
//! let mut model = MonteCarloModel::new(contract, config).unwrap();
//!
//! model.simulate();
//! let put = model.price(OptionSide::Put).unwrap();
//! assert!(put > 0.0);
//! ```
//!
//! ## Determinism
//!
//! With a fixed seed, sequential and parallel generation produce
//! bit-identical path matrices and therefore identical prices.

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
