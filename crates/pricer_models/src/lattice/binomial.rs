//! Cox-Ross-Rubinstein binomial lattice for European options.
//!
//! ## Construction
//!
//! - dt = T / n
//! - u = e^(σ√dt), d = 1/u
//! - p = (e^(r·dt) - d) / (u - d), q = 1 - p
//!
//! Terminal prices are S·u^j·d^(n-j) = S·e^(σ√dt·(2j - n)) for j = 0..=n,
//! taken as a single exponential per node. The value vector is
//! collapsed in place, one element per step:
//! V'[j] = e^(-r·dt)·(p·V[j+1] + q·V[j]).

use pricer_core::traits::PricingModel;
use pricer_core::types::{OptionContract, OptionSide, PricingError};

/// Upper bound on lattice steps (induction is O(n²) in time).
pub const MAX_STEPS: usize = 50_000;

/// Per-step lattice parameters derived from the contract and step count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeParams {
    /// Step length in years
    pub dt: f64,
    /// Up factor u
    pub up: f64,
    /// Down factor d = 1/u
    pub down: f64,
    /// Risk-neutral up probability p
    pub p_up: f64,
    /// Down probability q = 1 - p
    pub p_down: f64,
    /// One-step discount factor e^(-r·dt)
    pub step_discount: f64,
}

impl LatticeParams {
    fn new(contract: &OptionContract, steps: usize) -> Result<Self, PricingError> {
        let sigma = contract.volatility();
        if sigma <= 0.0 {
            return Err(PricingError::DegenerateInput(
                "binomial lattice requires positive volatility (σ = 0 gives u = d)".to_string(),
            ));
        }

        let dt = contract.maturity() / steps as f64;
        let up = (sigma * dt.sqrt()).exp();
        let down = 1.0 / up;
        let p_up = ((contract.rate() * dt).exp() - down) / (up - down);

        if !p_up.is_finite() || !(0.0..=1.0).contains(&p_up) {
            return Err(PricingError::NumericalInstability(format!(
                "risk-neutral probability p = {} is outside [0, 1]; increase steps",
                p_up
            )));
        }

        Ok(Self {
            dt,
            up,
            down,
            p_up,
            p_down: 1.0 - p_up,
            step_discount: (-contract.rate() * dt).exp(),
        })
    }
}

/// Recombining binomial lattice pricing a single European contract.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::OptionContract;
/// use pricer_models::lattice::BinomialTree;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let coarse = BinomialTree::new(contract, 3).unwrap();
/// assert_eq!(coarse.terminal_prices().len(), 4);
///
/// let fine = BinomialTree::new(contract, 500).unwrap();
/// let call = fine.price_call().unwrap();
/// assert!((call - 10.4506).abs() / 10.4506 < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTree {
    contract: OptionContract,
    steps: usize,
    params: LatticeParams,
}

impl BinomialTree {
    /// Builds a lattice with `steps` time steps.
    ///
    /// # Errors
    /// - `PricingError::InvalidInput` if `steps` is zero or above [`MAX_STEPS`]
    /// - `PricingError::DegenerateInput` if volatility is zero
    /// - `PricingError::NumericalInstability` if p falls outside [0, 1]
    pub fn new(contract: OptionContract, steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidInput(
                "binomial steps must be at least 1".to_string(),
            ));
        }
        if steps > MAX_STEPS {
            return Err(PricingError::InvalidInput(format!(
                "binomial steps must be at most {}, got {}",
                MAX_STEPS, steps
            )));
        }

        let params = LatticeParams::new(&contract, steps)?;
        Ok(Self {
            contract,
            steps,
            params,
        })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Derived per-step parameters.
    #[inline]
    pub fn params(&self) -> &LatticeParams {
        &self.params
    }

    /// Underlying prices at maturity, lowest first (`steps + 1` nodes).
    ///
    /// Nodes beyond the `f64` range come back as infinity rather than NaN.
    pub fn terminal_prices(&self) -> Vec<f64> {
        let n = self.steps as f64;
        let log_up = self.params.up.ln();
        let spot = self.contract.spot();
        (0..=self.steps)
            .map(|j| spot * (log_up * (2.0 * j as f64 - n)).exp())
            .collect()
    }

    /// Payoffs at maturity, floored at zero, aligned with [`terminal_prices`].
    ///
    /// [`terminal_prices`]: BinomialTree::terminal_prices
    pub fn terminal_payoffs(&self, side: OptionSide) -> Vec<f64> {
        let strike = self.contract.strike();
        self.terminal_prices()
            .into_iter()
            .map(|s| side.payoff(s, strike))
            .collect()
    }

    fn backward_induction(&self, side: OptionSide) -> Result<f64, PricingError> {
        let LatticeParams {
            p_up,
            p_down,
            step_discount,
            ..
        } = self.params;

        let prices = self.terminal_prices();
        if let Some(&node) = prices.iter().find(|s| !s.is_finite()) {
            return Err(PricingError::NumericalInstability(format!(
                "terminal lattice price {} is not finite; σ·√(T·n) is too large",
                node
            )));
        }

        let strike = self.contract.strike();
        let mut values: Vec<f64> = prices.into_iter().map(|s| side.payoff(s, strike)).collect();
        for i in (0..self.steps).rev() {
            for j in 0..=i {
                values[j] = step_discount * (p_up * values[j + 1] + p_down * values[j]);
            }
        }

        PricingError::ensure_finite("lattice value", values[0])
    }
}

impl PricingModel for BinomialTree {
    fn contract(&self) -> &OptionContract {
        &self.contract
    }

    fn price_call(&self) -> Result<f64, PricingError> {
        self.backward_induction(OptionSide::Call)
    }

    fn price_put(&self) -> Result<f64, PricingError> {
        self.backward_induction(OptionSide::Put)
    }
}
