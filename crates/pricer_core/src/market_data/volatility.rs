//! Historical (realised) volatility from a series of closing prices.
//!
//! The estimate is the population standard deviation of one-period returns,
//! annualised by `√periods_per_year`. Daily equity closes use
//! [`TRADING_DAYS_PER_YEAR`].
//!
//! # Examples
//!
//! ```
//! use pricer_core::market_data::{realised_volatility, ReturnKind, TRADING_DAYS_PER_YEAR};
//!
//! let closes = [100.0, 101.0, 99.5, 100.5, 102.0];
//! let vol = realised_volatility(&closes, ReturnKind::Simple, TRADING_DAYS_PER_YEAR).unwrap();
//! assert!(vol > 0.0 && vol < 1.0);
//! ```

use crate::types::PricingError;

/// Trading days per year used to annualise daily returns.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// How one-period returns are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnKind {
    /// Percent change `P[t] / P[t-1] - 1`
    #[default]
    Simple,
    /// Log return `ln(P[t] / P[t-1])`
    Log,
}

fn check_closes(closes: &[f64]) -> Result<(), PricingError> {
    if closes.len() < 2 {
        return Err(PricingError::InvalidInput(format!(
            "at least two closing prices are required, got {}",
            closes.len()
        )));
    }
    if let Some((idx, bad)) = closes
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(PricingError::InvalidInput(format!(
            "closing price at index {} must be positive and finite, got {}",
            idx, bad
        )));
    }
    Ok(())
}

/// One-period percent changes of a close series.
///
/// # Errors
/// `PricingError::InvalidInput` for fewer than two closes or a close that is
/// not positive and finite.
pub fn simple_returns(closes: &[f64]) -> Result<Vec<f64>, PricingError> {
    check_closes(closes)?;
    Ok(closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

/// One-period log returns of a close series.
///
/// # Errors
/// Same as [`simple_returns`].
pub fn log_returns(closes: &[f64]) -> Result<Vec<f64>, PricingError> {
    check_closes(closes)?;
    Ok(closes.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Annualised realised volatility of a close series.
///
/// # Arguments
/// * `closes` - Closing prices in chronological order
/// * `kind` - Return definition
/// * `periods_per_year` - Annualisation factor (252 for daily closes)
///
/// # Errors
/// `PricingError::InvalidInput` for a bad series or a non-positive
/// annualisation factor.
pub fn realised_volatility(
    closes: &[f64],
    kind: ReturnKind,
    periods_per_year: f64,
) -> Result<f64, PricingError> {
    if !(periods_per_year.is_finite() && periods_per_year > 0.0) {
        return Err(PricingError::InvalidInput(format!(
            "periods per year must be positive, got {}",
            periods_per_year
        )));
    }

    let returns = match kind {
        ReturnKind::Simple => simple_returns(closes)?,
        ReturnKind::Log => log_returns(closes)?,
    };

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    PricingError::ensure_finite("realised volatility", variance.sqrt() * periods_per_year.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Returns
    // ==========================================================

    #[test]
    fn test_simple_returns() {
        let r = simple_returns(&[100.0, 110.0, 99.0]).unwrap();
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(r[1], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_log_returns() {
        let r = log_returns(&[100.0, 200.0]).unwrap();
        assert_relative_eq!(r[0], 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_returns_reject_short_series() {
        assert!(matches!(
            simple_returns(&[100.0]),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(log_returns(&[]), Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_returns_reject_non_positive_close() {
        match simple_returns(&[100.0, 0.0, 101.0]) {
            Err(PricingError::InvalidInput(msg)) => assert!(msg.contains("index 1")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert!(log_returns(&[100.0, f64::NAN]).is_err());
    }

    // ==========================================================
    // Realised Volatility
    // ==========================================================

    #[test]
    fn test_constant_series_has_zero_vol() {
        let vol = realised_volatility(&[50.0; 10], ReturnKind::Log, TRADING_DAYS_PER_YEAR).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_alternating_returns_population_std() {
        // Returns +10%, -10%: mean 0, population std 0.1
        let vol = realised_volatility(&[100.0, 110.0, 99.0], ReturnKind::Simple, 1.0).unwrap();
        assert_relative_eq!(vol, 0.1, epsilon = 1e-12);

        let annual =
            realised_volatility(&[100.0, 110.0, 99.0], ReturnKind::Simple, TRADING_DAYS_PER_YEAR)
                .unwrap();
        assert_relative_eq!(annual, 0.1 * 252.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_log_and_simple_close_for_small_moves() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 * (1.0 + 0.001 * ((i % 3) as f64 - 1.0)))
            .collect();
        let simple = realised_volatility(&closes, ReturnKind::Simple, TRADING_DAYS_PER_YEAR).unwrap();
        let log = realised_volatility(&closes, ReturnKind::Log, TRADING_DAYS_PER_YEAR).unwrap();
        assert_relative_eq!(simple, log, max_relative = 0.01);
    }

    #[test]
    fn test_rejects_bad_annualisation() {
        assert!(realised_volatility(&[1.0, 2.0], ReturnKind::Simple, 0.0).is_err());
        assert!(realised_volatility(&[1.0, 2.0], ReturnKind::Simple, f64::NAN).is_err());
    }
}
