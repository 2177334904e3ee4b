//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute
//! paths and through the module-level re-exports.

use chrono::NaiveDate;

/// Test that the trait module is accessible via absolute path.
#[test]
fn test_traits_module_exports() {
    use pricer_core::traits::priceable::PricingModel;
    use pricer_core::traits::Float;
    use pricer_core::types::contract::{OptionContract, OptionSide};
    use pricer_core::types::error::PricingError;

    struct Flat(OptionContract);

    impl PricingModel for Flat {
        fn contract(&self) -> &OptionContract {
            &self.0
        }
        fn price_call(&self) -> Result<f64, PricingError> {
            Ok(1.0)
        }
        fn price_put(&self) -> Result<f64, PricingError> {
            Ok(2.0)
        }
    }

    let model = Flat(OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap());
    assert_eq!(model.price(OptionSide::Put).unwrap(), 2.0);

    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(4.0_f64), 2.0);
}

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::time::{days_between, year_fraction, Date, DAYS_PER_YEAR};

    let start = Date::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    let end = Date::from_ymd(2025, 1, 1).unwrap();
    assert_eq!(days_between(start, end), 366);
    assert_eq!(year_fraction(DAYS_PER_YEAR), 1.0);
    assert_eq!(end.into_inner(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
}

/// Test the module-level re-exports.
#[test]
fn test_reexports() {
    use pricer_core::market_data::{realised_volatility, ReturnKind, TRADING_DAYS_PER_YEAR};
    use pricer_core::types::{ContractError, OptionContract, OptionSide, PricingError};

    let err = OptionContract::new(100.0, 100.0, 1.0, 0.05, -1.0).unwrap_err();
    assert!(matches!(
        err,
        PricingError::InvalidContract(ContractError::InvalidVolatility { .. })
    ));
    assert_eq!(OptionSide::ALL.len(), 2);

    let vol = realised_volatility(&[10.0, 10.5, 10.2], ReturnKind::Log, TRADING_DAYS_PER_YEAR);
    assert!(vol.is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_derives() {
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
    assert_serde::<pricer_core::types::OptionContract>();
    assert_serde::<pricer_core::types::OptionSide>();
    assert_serde::<pricer_core::types::Date>();
    assert_serde::<pricer_core::market_data::ReturnKind>();
}
