//! # Pricer Models (L2: Business Logic)
//!
//! Deterministic pricing models for European options.
//!
//! This crate provides:
//! - Standard normal CDF/PDF (`analytical::distributions`)
//! - Black-Scholes closed form with analytical Greeks (`analytical::black_scholes`)
//! - Prices and Greeks across expiry dates (`analytical::term_structure`)
//! - Cox-Ross-Rubinstein binomial lattice (`lattice::binomial`)
//!
//! Every model implements [`pricer_core::traits::PricingModel`].
//!
//! ## Design Principles
//!
//! - **Validated once**: models are built from an already-validated
//!   `OptionContract` and reject their own singular inputs at construction
//! - **Derived quantities cached**: d-terms and lattice parameters are
//!   computed when the model is built

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
