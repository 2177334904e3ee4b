//! Black-Scholes prices and Greeks across a strip of expiry dates.
//!
//! Each expiry strictly after the valuation date becomes one [`TermPoint`]
//! with maturity `days / 365`. Expiries on or before the valuation date
//! would give a zero or negative maturity and are skipped.

use pricer_core::traits::PricingModel;
use pricer_core::types::{days_between, Date, OptionContract, OptionSide, PricingError};

use super::black_scholes::{BlackScholes, Greeks};

/// Price and Greeks of the call and put for one expiry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermPoint {
    /// Expiry date
    pub expiry: Date,
    /// Calendar days from valuation to expiry
    pub days: u32,
    /// Time to maturity in years (ACT/365)
    pub maturity: f64,
    /// Call fair value
    pub call_price: f64,
    /// Put fair value
    pub put_price: f64,
    /// Call sensitivities
    pub call_greeks: Greeks,
    /// Put sensitivities
    pub put_greeks: Greeks,
}

impl TermPoint {
    /// Price for one side.
    pub fn price(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => self.call_price,
            OptionSide::Put => self.put_price,
        }
    }

    /// Greeks for one side.
    pub fn greeks(&self, side: OptionSide) -> &Greeks {
        match side {
            OptionSide::Call => &self.call_greeks,
            OptionSide::Put => &self.put_greeks,
        }
    }
}

/// Values the call and put at every expiry after `valuation`.
///
/// Results keep the order of `expiries`.
///
/// # Errors
/// - `PricingError::InvalidContract` for invalid spot, strike, rate or volatility
/// - `PricingError::DegenerateInput` for zero volatility
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::analytical::term_structure;
///
/// let valuation = Date::from_ymd(2024, 12, 12).unwrap();
/// let expiries = [
///     Date::from_ymd(2024, 12, 12).unwrap(), // same day, skipped
///     Date::from_ymd(2024, 12, 20).unwrap(),
///     Date::from_ymd(2025, 1, 17).unwrap(),
/// ];
///
/// let points = term_structure(250.0, 260.0, 0.04, 0.3, valuation, &expiries).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].days, 8);
/// assert!(points[1].call_price > points[0].call_price);
/// ```
pub fn term_structure(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    valuation: Date,
    expiries: &[Date],
) -> Result<Vec<TermPoint>, PricingError> {
    expiries
        .iter()
        .filter_map(|&expiry| {
            let days = days_between(valuation, expiry);
            u32::try_from(days)
                .ok()
                .filter(|&d| d > 0)
                .map(|d| (expiry, d))
        })
        .map(|(expiry, days)| {
            let contract = OptionContract::from_days(spot, strike, days, rate, volatility)?;
            let model = BlackScholes::new(contract)?;
            Ok(TermPoint {
                expiry,
                days,
                maturity: contract.maturity(),
                call_price: model.price_call()?,
                put_price: model.price_put()?,
                call_greeks: model.greeks(OptionSide::Call)?,
                put_greeks: model.greeks(OptionSide::Put)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_skips_expired_and_same_day() {
        let valuation = date(2024, 6, 1);
        let expiries = [date(2024, 5, 1), date(2024, 6, 1), date(2024, 6, 2)];
        let points = term_structure(100.0, 100.0, 0.05, 0.2, valuation, &expiries).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].expiry, date(2024, 6, 2));
        assert_eq!(points[0].days, 1);
    }

    #[test]
    fn test_matches_direct_model() {
        let valuation = date(2024, 1, 1);
        let expiry = date(2025, 1, 1);
        let points = term_structure(100.0, 100.0, 0.05, 0.2, valuation, &[expiry]).unwrap();
        let point = &points[0];

        assert_eq!(point.days, 366);
        assert_relative_eq!(point.maturity, 366.0 / 365.0, epsilon = 1e-15);

        let contract = OptionContract::new(100.0, 100.0, 366.0 / 365.0, 0.05, 0.2).unwrap();
        let bs = BlackScholes::new(contract).unwrap();
        assert_relative_eq!(point.price(OptionSide::Call), bs.price_call().unwrap(), epsilon = 1e-12);
        assert_relative_eq!(point.put_price, bs.price_put().unwrap(), epsilon = 1e-12);
        assert_eq!(*point.greeks(OptionSide::Put), bs.greeks(OptionSide::Put).unwrap());
    }

    #[test]
    fn test_preserves_input_order() {
        let valuation = date(2024, 1, 1);
        let expiries = [date(2024, 12, 20), date(2024, 3, 15), date(2024, 6, 21)];
        let points = term_structure(100.0, 100.0, 0.05, 0.2, valuation, &expiries).unwrap();
        let got: Vec<Date> = points.iter().map(|p| p.expiry).collect();
        assert_eq!(got, expiries.to_vec());
    }

    #[test]
    fn test_empty_when_all_expired() {
        let points = term_structure(100.0, 100.0, 0.05, 0.2, date(2025, 1, 1), &[date(2024, 1, 1)])
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_propagates_contract_errors() {
        let result = term_structure(-1.0, 100.0, 0.05, 0.2, date(2024, 1, 1), &[date(2024, 2, 1)]);
        assert!(matches!(result, Err(PricingError::InvalidContract(_))));

        let result = term_structure(100.0, 100.0, 0.05, 0.0, date(2024, 1, 1), &[date(2024, 2, 1)]);
        assert!(matches!(result, Err(PricingError::DegenerateInput(_))));
    }
}
