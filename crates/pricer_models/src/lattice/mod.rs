//! Lattice pricing models.
//!
//! - [`binomial`]: Cox-Ross-Rubinstein recombining tree

pub mod binomial;

pub use binomial::{BinomialTree, LatticeParams, MAX_STEPS};
