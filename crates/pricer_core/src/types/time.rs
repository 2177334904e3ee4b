//! Calendar dates and the ACT/365 day count used throughout the engine.
//!
//! Maturities are quoted in calendar days and converted to years by dividing
//! by 365. There is no business-day calendar and no leap-year adjustment.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{year_fraction, Date};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let days = valuation.days_until(expiry);
//! assert_eq!(days, 182);
//! assert!((year_fraction(days as f64) - 0.4986).abs() < 0.001);
//! ```

use chrono::{Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::PricingError;

/// Calendar days per year in the ACT/365 convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a number of calendar days into a year fraction (ACT/365).
///
/// # Examples
/// ```
/// use pricer_core::types::time::year_fraction;
///
/// assert_eq!(year_fraction(365.0), 1.0);
/// assert_eq!(year_fraction(73.0), 0.2);
/// ```
#[inline]
pub fn year_fraction(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Calendar days from `start` to `end` (negative if `end` is earlier).
///
/// # Examples
/// ```
/// use pricer_core::types::time::{days_between, Date};
///
/// let start = Date::from_ymd(2024, 12, 12).unwrap();
/// let end = Date::from_ymd(2024, 12, 20).unwrap();
/// assert_eq!(days_between(start, end), 8);
/// ```
#[inline]
pub fn days_between(start: Date, end: Date) -> i64 {
    end - start
}

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Parses and formats as ISO 8601 (`YYYY-MM-DD`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    /// `PricingError::InvalidDate` if the components do not form a date.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, PricingError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| PricingError::InvalidDate(format!("{}-{}-{}", year, month, day)))
    }

    /// Today's date in local time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses an ISO 8601 date string.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-12-20").unwrap();
    /// assert_eq!(date.to_string(), "2024-12-20");
    /// assert!(Date::parse("20/12/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| PricingError::InvalidDate(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying `NaiveDate`.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Calendar days from `self` to `later` (negative if `later` is earlier).
    #[inline]
    pub fn days_until(self, later: Date) -> i64 {
        later - self
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of calendar days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, PricingError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
