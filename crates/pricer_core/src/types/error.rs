//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error surface shared by every pricing model
//! - `ContractError`: Validation failures when building an [`OptionContract`]
//!
//! [`OptionContract`]: super::OptionContract

use thiserror::Error;

/// Contract validation errors.
///
/// Raised by [`OptionContract::new`](super::OptionContract::new) when a
/// parameter would make the pricing formulas produce NaN or infinity.
///
/// # Examples
/// ```
/// use pricer_core::types::ContractError;
///
/// let err = ContractError::InvalidMaturity { maturity: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid maturity: T = 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Spot price is non-positive or not finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Strike price is non-positive or not finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Time to maturity is non-positive or not finite.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The rejected maturity in years
        maturity: f64,
    },

    /// Volatility is negative or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Risk-free rate is not finite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate value
        rate: f64,
    },
}

/// Categorised pricing errors.
///
/// Every pricing routine returns `Result<_, PricingError>`; there are no
/// sentinel prices.
///
/// # Variants
/// - `InvalidContract`: Contract parameters failed validation
/// - `InvalidInput`: Model configuration or helper input is invalid
/// - `InvalidDate`: A date could not be parsed or constructed
/// - `UnsupportedSide`: Option side label not recognised
/// - `NotSimulated`: Monte Carlo price requested before simulation
/// - `DegenerateInput`: Inputs sit on a singularity of the model
/// - `NumericalInstability`: Computation produced an unusable value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::UnsupportedSide("straddle".to_string());
/// assert_eq!(format!("{}", err), "Unsupported option side: straddle");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Contract parameters failed validation.
    #[error("Invalid contract: {0}")]
    InvalidContract(#[from] ContractError),

    /// Invalid model configuration or input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid or unparseable date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Option side label not recognised.
    #[error("Unsupported option side: {0}")]
    UnsupportedSide(String),

    /// Price requested from a simulation model that has not been run.
    #[error("Simulation has not been run: call simulate() before pricing")]
    NotSimulated,

    /// Inputs sit on a singularity of the model (e.g. zero volatility).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Checks that a computed value is finite, naming the quantity otherwise.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// assert_eq!(PricingError::ensure_finite("price", 1.5), Ok(1.5));
    /// assert!(PricingError::ensure_finite("price", f64::NAN).is_err());
    /// ```
    pub fn ensure_finite(what: &str, value: f64) -> Result<f64, PricingError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PricingError::NumericalInstability(format!(
                "{} is not finite ({})",
                what, value
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_display() {
        let err = ContractError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");

        let err = ContractError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_contract_error_converts_into_pricing_error() {
        let err: PricingError = ContractError::InvalidStrike { strike: 0.0 }.into();
        match err {
            PricingError::InvalidContract(ContractError::InvalidStrike { strike }) => {
                assert_eq!(strike, 0.0);
            }
            other => panic!("Expected InvalidContract, got {:?}", other),
        }
    }

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::InvalidInput("steps must be at least 1".to_string()).to_string(),
            "Invalid input: steps must be at least 1"
        );
        assert!(PricingError::NotSimulated.to_string().contains("simulate()"));
        assert_eq!(
            PricingError::InvalidContract(ContractError::InvalidMaturity { maturity: 0.0 })
                .to_string(),
            "Invalid contract: Invalid maturity: T = 0"
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(PricingError::ensure_finite("delta", 0.5), Ok(0.5));
        match PricingError::ensure_finite("delta", f64::INFINITY) {
            Err(PricingError::NumericalInstability(msg)) => assert!(msg.contains("delta")),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NotSimulated;
        let _: &dyn std::error::Error = &err;
    }
}
