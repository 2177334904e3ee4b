//! European option contract descriptor.
//!
//! This module provides:
//! - `OptionSide`: Call or put
//! - `OptionContract`: Spot, strike, maturity, rate and volatility,
//!   validated once at construction

use std::fmt;
use std::str::FromStr;

use super::error::{ContractError, PricingError};
use super::time::{year_fraction, DAYS_PER_YEAR};

/// Side of a European option.
///
/// Parsing accepts `call`/`put`, `c`/`p` and the labels `Call Option` /
/// `Put Option`, case-insensitively. Anything else is
/// [`PricingError::UnsupportedSide`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionSide;
///
/// let side: OptionSide = "Put Option".parse().unwrap();
/// assert_eq!(side, OptionSide::Put);
/// assert!("straddle".parse::<OptionSide>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Right to buy: payoff max(S - K, 0)
    Call,
    /// Right to sell: payoff max(K - S, 0)
    Put,
}

impl OptionSide {
    /// Both sides, call first.
    pub const ALL: [OptionSide; 2] = [OptionSide::Call, OptionSide::Put];

    /// Payoff at expiry for an underlying price, floored at zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionSide;
    ///
    /// assert_eq!(OptionSide::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionSide::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionSide::Call => (underlying - strike).max(0.0),
            OptionSide::Put => (strike - underlying).max(0.0),
        }
    }

    /// Lowercase label (`"call"` or `"put"`).
    pub fn as_str(self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionSide {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, PricingError> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" | "call option" => Ok(OptionSide::Call),
            "put" | "p" | "put option" => Ok(OptionSide::Put),
            _ => Err(PricingError::UnsupportedSide(s.to_string())),
        }
    }
}

/// Immutable description of a single European option.
///
/// All fields are validated at construction so that every model can rely on
/// `spot > 0`, `strike > 0`, `maturity > 0`, `volatility >= 0` and a finite
/// rate.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionContract;
///
/// // 8 calendar days to expiry, maturity = 8 / 365 years
/// let contract = OptionContract::from_days(250.0, 260.0, 8, 0.04, 0.3).unwrap();
/// assert!((contract.maturity() - 8.0 / 365.0).abs() < 1e-15);
/// assert_eq!(contract.calendar_days(), 8);
///
/// // Zero maturity is rejected
/// assert!(OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
}

impl OptionContract {
    /// Creates a contract with maturity given in years.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (positive)
    /// * `strike` - Exercise price (positive)
    /// * `maturity` - Time to expiry in years (positive)
    /// * `rate` - Continuously compounded risk-free rate (finite, may be negative)
    /// * `volatility` - Annualised volatility (non-negative)
    ///
    /// # Errors
    /// `PricingError::InvalidContract` naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(ContractError::InvalidSpot { spot }.into());
        }
        if !(strike.is_finite() && strike > 0.0) {
            return Err(ContractError::InvalidStrike { strike }.into());
        }
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(ContractError::InvalidMaturity { maturity }.into());
        }
        if !rate.is_finite() {
            return Err(ContractError::InvalidRate { rate }.into());
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(ContractError::InvalidVolatility { volatility }.into());
        }

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        })
    }

    /// Creates a contract with maturity given in calendar days (ACT/365).
    pub fn from_days(
        spot: f64,
        strike: f64,
        days_to_maturity: u32,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        Self::new(
            spot,
            strike,
            year_fraction(f64::from(days_to_maturity)),
            rate,
            volatility,
        )
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Calendar days to maturity, rounded, never below one.
    #[inline]
    pub fn calendar_days(&self) -> usize {
        ((self.maturity * DAYS_PER_YEAR).round() as usize).max(1)
    }

    /// Discount factor to maturity, e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Payoff if the underlying stayed at spot, floored at zero.
    #[inline]
    pub fn intrinsic_value(&self, side: OptionSide) -> f64 {
        side.payoff(self.spot, self.strike)
    }

    /// Returns a copy with a different spot price, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(spot, self.strike, self.maturity, self.rate, self.volatility)
    }

    /// Returns a copy with a different strike, re-validated.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, strike, self.maturity, self.rate, self.volatility)
    }

    /// Returns a copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, self.maturity, self.rate, volatility)
    }

    /// Returns a copy with a different maturity in years, re-validated.
    pub fn with_maturity(&self, maturity: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, maturity, self.rate, self.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // OptionSide Tests
    // ==========================================================

    #[test]
    fn test_side_parse_accepted_labels() {
        for label in ["call", "CALL", "c", "Call Option", " call "] {
            assert_eq!(label.parse::<OptionSide>().unwrap(), OptionSide::Call);
        }
        for label in ["put", "P", "Put Option"] {
            assert_eq!(label.parse::<OptionSide>().unwrap(), OptionSide::Put);
        }
    }

    #[test]
    fn test_side_parse_unsupported() {
        match "binary".parse::<OptionSide>() {
            Err(PricingError::UnsupportedSide(label)) => assert_eq!(label, "binary"),
            other => panic!("Expected UnsupportedSide, got {:?}", other),
        }
    }

    #[test]
    fn test_side_payoff_floor() {
        assert_eq!(OptionSide::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionSide::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionSide::Call.payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(OptionSide::Call.to_string(), "call");
        assert_eq!(OptionSide::Put.to_string(), "put");
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid() {
        let c = OptionContract::new(100.0, 95.0, 0.5, 0.05, 0.2).unwrap();
        assert_eq!(c.spot(), 100.0);
        assert_eq!(c.strike(), 95.0);
        assert_eq!(c.maturity(), 0.5);
        assert_eq!(c.rate(), 0.05);
        assert_eq!(c.volatility(), 0.2);
    }

    #[test]
    fn test_new_zero_volatility_allowed() {
        assert!(OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0).is_ok());
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(OptionContract::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_maturity() {
        let result = OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.2);
        assert!(matches!(
            result,
            Err(PricingError::InvalidContract(ContractError::InvalidMaturity { .. }))
        ));
    }

    #[test]
    fn test_new_rejects_negative_volatility() {
        let result = OptionContract::new(100.0, 100.0, 1.0, 0.05, -0.2);
        match result {
            Err(PricingError::InvalidContract(ContractError::InvalidVolatility { volatility })) => {
                assert_eq!(volatility, -0.2);
            }
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_bad_spot_and_strike() {
        assert!(matches!(
            OptionContract::new(0.0, 100.0, 1.0, 0.05, 0.2),
            Err(PricingError::InvalidContract(ContractError::InvalidSpot { .. }))
        ));
        assert!(matches!(
            OptionContract::new(100.0, -1.0, 1.0, 0.05, 0.2),
            Err(PricingError::InvalidContract(ContractError::InvalidStrike { .. }))
        ));
        assert!(matches!(
            OptionContract::new(f64::NAN, 100.0, 1.0, 0.05, 0.2),
            Err(PricingError::InvalidContract(ContractError::InvalidSpot { .. }))
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_rate() {
        assert!(matches!(
            OptionContract::new(100.0, 100.0, 1.0, f64::INFINITY, 0.2),
            Err(PricingError::InvalidContract(ContractError::InvalidRate { .. }))
        ));
    }

    #[test]
    fn test_from_days_zero_rejected() {
        assert!(OptionContract::from_days(100.0, 100.0, 0, 0.05, 0.2).is_err());
    }

    // ==========================================================
    // Derived Quantities
    // ==========================================================

    #[test]
    fn test_calendar_days() {
        let c = OptionContract::from_days(100.0, 100.0, 365, 0.05, 0.2).unwrap();
        assert_eq!(c.calendar_days(), 365);

        let short = OptionContract::new(100.0, 100.0, 0.0001, 0.05, 0.2).unwrap();
        assert_eq!(short.calendar_days(), 1);
    }

    #[test]
    fn test_discount_factor() {
        let c = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(c.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_with_helpers_revalidate() {
        let c = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_eq!(c.with_spot(120.0).unwrap().spot(), 120.0);
        assert_eq!(c.with_strike(90.0).unwrap().strike(), 90.0);
        assert_eq!(c.with_maturity(2.0).unwrap().maturity(), 2.0);
        assert!(c.with_volatility(-0.1).is_err());
    }

    #[test]
    fn test_intrinsic_value() {
        let c = OptionContract::new(110.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_eq!(c.intrinsic_value(OptionSide::Call), 10.0);
        assert_eq!(c.intrinsic_value(OptionSide::Put), 0.0);
    }
}
