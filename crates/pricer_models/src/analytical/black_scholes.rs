//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The d-terms, √T and the discount factor are computed once when the model
//! is built and shared by every price and Greek.

use pricer_core::traits::PricingModel;
use pricer_core::types::{OptionContract, OptionSide, PricingError, DAYS_PER_YEAR};

use super::distributions::{norm_cdf, norm_pdf};

/// Quantities shared by every Black-Scholes price and Greek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DTerms {
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// √T
    pub sqrt_t: f64,
    /// e^(-rT)
    pub discount: f64,
}

impl DTerms {
    /// Computes the d-terms for a contract.
    ///
    /// # Errors
    /// - `PricingError::DegenerateInput` if σ = 0 (d₁ is undefined)
    /// - `PricingError::NumericalInstability` if a term is not finite
    pub fn new(contract: &OptionContract) -> Result<Self, PricingError> {
        let sigma = contract.volatility();
        if sigma <= 0.0 {
            return Err(PricingError::DegenerateInput(
                "Black-Scholes requires positive volatility (σ = 0)".to_string(),
            ));
        }

        let t = contract.maturity();
        let sqrt_t = t.sqrt();
        let sigma_sqrt_t = sigma * sqrt_t;
        let d1 = ((contract.spot() / contract.strike()).ln()
            + (contract.rate() + 0.5 * sigma * sigma) * t)
            / sigma_sqrt_t;

        Ok(Self {
            d1: PricingError::ensure_finite("d1", d1)?,
            d2: d1 - sigma_sqrt_t,
            sqrt_t,
            discount: contract.discount_factor(),
        })
    }
}

/// Sensitivities of an option price.
///
/// Theta is per year of calendar time, with the sign convention "value
/// change as time passes" (negative for a plain long call). Use
/// [`Greeks::theta_per_day`] for a daily figure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂t (per year)
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Theta per calendar day (ACT/365).
    #[inline]
    pub fn theta_per_day(&self) -> f64 {
        self.theta / DAYS_PER_YEAR
    }
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for one European
/// contract under lognormal dynamics.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::OptionContract;
/// use pricer_models::analytical::BlackScholes;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let bs = BlackScholes::new(contract).unwrap();
/// let call_price = bs.price_call().unwrap();
/// let put_price = bs.price_put().unwrap();
///
/// assert!((call_price - 10.4506).abs() < 1e-4);
/// assert!((put_price - 5.5735).abs() < 1e-4);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes {
    contract: OptionContract,
    terms: DTerms,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model for a contract.
    ///
    /// # Errors
    /// - `PricingError::DegenerateInput` if the contract's volatility is zero
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionContract, PricingError};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let flat = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0).unwrap();
    /// assert!(matches!(
    ///     BlackScholes::new(flat),
    ///     Err(PricingError::DegenerateInput(_))
    /// ));
    /// ```
    pub fn new(contract: OptionContract) -> Result<Self, PricingError> {
        let terms = DTerms::new(&contract)?;
        Ok(Self { contract, terms })
    }

    /// Returns the shared d-terms.
    #[inline]
    pub fn terms(&self) -> &DTerms {
        &self.terms
    }

    /// Returns d₁.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.terms.d1
    }

    /// Returns d₂.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.terms.d2
    }

    /// Delta: N(d₁) for a call, N(d₁) - 1 for a put.
    pub fn delta(&self, side: OptionSide) -> f64 {
        let n_d1 = norm_cdf(self.terms.d1);
        match side {
            OptionSide::Call => n_d1,
            OptionSide::Put => n_d1 - 1.0,
        }
    }

    /// Gamma: φ(d₁) / (S·σ·√T), identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        let c = &self.contract;
        norm_pdf(self.terms.d1) / (c.spot() * c.volatility() * self.terms.sqrt_t)
    }

    /// Vega: S·φ(d₁)·√T, identical for calls and puts.
    pub fn vega(&self) -> f64 {
        self.contract.spot() * norm_pdf(self.terms.d1) * self.terms.sqrt_t
    }

    /// Theta per year.
    ///
    /// Call: -S·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂)
    /// Put: -S·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self, side: OptionSide) -> f64 {
        let c = &self.contract;
        let DTerms {
            d1,
            d2,
            sqrt_t,
            discount,
        } = self.terms;
        let decay = -c.spot() * norm_pdf(d1) * c.volatility() / (2.0 * sqrt_t);
        let carry = c.rate() * c.strike() * discount;
        match side {
            OptionSide::Call => decay - carry * norm_cdf(d2),
            OptionSide::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Theta per calendar day.
    pub fn theta_per_day(&self, side: OptionSide) -> f64 {
        self.theta(side) / DAYS_PER_YEAR
    }

    /// Rho: K·T·e^(-rT)·N(d₂) for a call, -K·T·e^(-rT)·N(-d₂) for a put.
    pub fn rho(&self, side: OptionSide) -> f64 {
        let c = &self.contract;
        let scale = c.strike() * c.maturity() * self.terms.discount;
        match side {
            OptionSide::Call => scale * norm_cdf(self.terms.d2),
            OptionSide::Put => -scale * norm_cdf(-self.terms.d2),
        }
    }

    /// All five Greeks for one side.
    ///
    /// # Errors
    /// `PricingError::NumericalInstability` if any sensitivity is not finite.
    pub fn greeks(&self, side: OptionSide) -> Result<Greeks, PricingError> {
        Ok(Greeks {
            delta: PricingError::ensure_finite("delta", self.delta(side))?,
            gamma: PricingError::ensure_finite("gamma", self.gamma())?,
            theta: PricingError::ensure_finite("theta", self.theta(side))?,
            vega: PricingError::ensure_finite("vega", self.vega())?,
            rho: PricingError::ensure_finite("rho", self.rho(side))?,
        })
    }
}

impl PricingModel for BlackScholes {
    fn contract(&self) -> &OptionContract {
        &self.contract
    }

    fn price_call(&self) -> Result<f64, PricingError> {
        let c = &self.contract;
        let price = c.spot() * norm_cdf(self.terms.d1)
            - c.strike() * self.terms.discount * norm_cdf(self.terms.d2);
        PricingError::ensure_finite("call price", price.max(0.0))
    }

    fn price_put(&self) -> Result<f64, PricingError> {
        let c = &self.contract;
        let price = c.strike() * self.terms.discount * norm_cdf(-self.terms.d2)
            - c.spot() * norm_cdf(-self.terms.d1);
        PricingError::ensure_finite("put price", price.max(0.0))
    }
}
