//! The pricing model abstraction.
//!
//! Every model in the workspace (closed form, lattice, simulation) prices
//! both sides of a single [`OptionContract`] through [`PricingModel`].

use crate::types::{OptionContract, OptionSide, PricingError};

/// A model able to value a European call and put on one contract.
///
/// Both sides are required methods; there is no defaulted put. Callers
/// usually go through [`PricingModel::price`], which dispatches on
/// [`OptionSide`].
///
/// Models are selected through a closed enum at the driver level, so this
/// trait is used with static dispatch.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::{OptionContract, OptionSide, PricingError};
///
/// /// Values each option at its discounted intrinsic value.
/// struct Intrinsic(OptionContract);
///
/// impl PricingModel for Intrinsic {
///     fn contract(&self) -> &OptionContract {
///         &self.0
///     }
///
///     fn price_call(&self) -> Result<f64, PricingError> {
///         Ok(self.0.discount_factor() * self.0.intrinsic_value(OptionSide::Call))
///     }
///
///     fn price_put(&self) -> Result<f64, PricingError> {
///         Ok(self.0.discount_factor() * self.0.intrinsic_value(OptionSide::Put))
///     }
/// }
///
/// let contract = OptionContract::new(110.0, 100.0, 1.0, 0.0, 0.2).unwrap();
/// let model = Intrinsic(contract);
/// assert_eq!(model.price(OptionSide::Call).unwrap(), 10.0);
/// assert_eq!(model.price(OptionSide::Put).unwrap(), 0.0);
/// ```
pub trait PricingModel {
    /// The contract this model values.
    fn contract(&self) -> &OptionContract;

    /// Fair value of the European call.
    fn price_call(&self) -> Result<f64, PricingError>;

    /// Fair value of the European put.
    fn price_put(&self) -> Result<f64, PricingError>;

    /// Fair value for the requested side.
    fn price(&self, side: OptionSide) -> Result<f64, PricingError> {
        match side {
            OptionSide::Call => self.price_call(),
            OptionSide::Put => self.price_put(),
        }
    }

    /// Put-call parity residual `C - P - (S - K·e^(-rT))`.
    ///
    /// Zero for an exact model; a convergence diagnostic for approximate ones.
    fn parity_residual(&self) -> Result<f64, PricingError> {
        let c = self.contract();
        let forward_gap = c.spot() - c.strike() * c.discount_factor();
        Ok(self.price_call()? - self.price_put()? - forward_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        contract: OptionContract,
        call: f64,
        put: Result<f64, PricingError>,
    }

    impl PricingModel for Fixed {
        fn contract(&self) -> &OptionContract {
            &self.contract
        }

        fn price_call(&self) -> Result<f64, PricingError> {
            Ok(self.call)
        }

        fn price_put(&self) -> Result<f64, PricingError> {
            self.put.clone()
        }
    }

    fn contract() -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.0, 0.2).unwrap()
    }

    #[test]
    fn test_price_dispatches_by_side() {
        let model = Fixed {
            contract: contract(),
            call: 8.0,
            put: Ok(8.0),
        };
        assert_eq!(model.price(OptionSide::Call).unwrap(), 8.0);
        assert_eq!(model.price(OptionSide::Put).unwrap(), 8.0);
    }

    #[test]
    fn test_errors_propagate_through_dispatch() {
        let model = Fixed {
            contract: contract(),
            call: 1.0,
            put: Err(PricingError::NotSimulated),
        };
        assert_eq!(model.price(OptionSide::Put), Err(PricingError::NotSimulated));
        assert!(model.parity_residual().is_err());
    }

    #[test]
    fn test_parity_residual_zero_rate_at_the_money() {
        let model = Fixed {
            contract: contract(),
            call: 7.9656,
            put: Ok(7.9656),
        };
        assert!(model.parity_residual().unwrap().abs() < 1e-12);
    }
}
