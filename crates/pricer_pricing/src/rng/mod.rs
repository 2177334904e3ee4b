//! # Random Number Generation Infrastructure
//!
//! Seeded pseudo-random generators for Monte Carlo simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Per-path streams**: path `i` uses the stream `(base_seed, i)`, so
//!   sequential and parallel generation produce identical paths
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! // Independent stream for path 3 of the same simulation
//! let mut path_rng = PricerRng::for_stream(12345, 3);
//! assert!(path_rng.gen_uniform() < 1.0);
//! ```

pub mod prng;

pub use prng::{stream_seed, PricerRng};
