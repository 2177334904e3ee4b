//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! The CDF uses Hart's double-precision rational approximation (as
//! popularised by West), accurate to roughly 1e-14 over the whole real line.
//! Both functions are generic over `T: Float`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Beyond this |x| the tail probability underflows f64.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational form and the continued fraction.
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn lit<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + lit::<T>(c))
}

/// Lower tail Φ(-|x|).
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > lit(TAIL_CUTOFF) {
        return T::zero();
    }

    let gaussian = (-abs_x * abs_x / lit(2.0)).exp();
    if abs_x < lit(RATIONAL_LIMIT) {
        gaussian * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x)
    } else {
        // Continued fraction for the far tail
        let mut cf = abs_x + lit(0.65);
        for k in [4.0, 3.0, 2.0, 1.0] {
            cf = abs_x + lit::<T>(k) / cf;
        }
        gaussian / cf / lit(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function Φ(x).
///
/// Symmetric by construction: `norm_cdf(x) + norm_cdf(-x) == 1` up to
/// rounding, which keeps closed-form put-call parity exact.
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.959_963_984_540_054_f64) - 0.975).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function φ(x).
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_401_432_7).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-x * x / lit(2.0)).exp()
}
