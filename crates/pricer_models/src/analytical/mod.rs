//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Prices and Greeks across a strip of expiry dates
//!
//! ## Design Principles
//!
//! - **Shared d-terms**: d₁, d₂, √T and e^(-rT) are computed once per model
//! - **No sentinels**: every routine returns `Result<_, PricingError>`
//! - **Numerical Stability**: Hart's rational approximation for the normal CDF

pub mod black_scholes;
pub mod distributions;
pub mod term_structure;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, DTerms, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use term_structure::{term_structure, TermPoint};
