//! Contract, time and error types.
//!
//! This module provides:
//! - `contract`: `OptionContract` and `OptionSide`
//! - `time`: `Date` and the ACT/365 day count
//! - `error`: `PricingError` and `ContractError`
//!
//! # Re-exports
//!
//! - [`OptionContract`], [`OptionSide`] from `contract`
//! - [`Date`], [`year_fraction`], [`days_between`], [`DAYS_PER_YEAR`] from `time`
//! - [`PricingError`], [`ContractError`] from `error`

pub mod contract;
pub mod error;
pub mod time;

pub use contract::{OptionContract, OptionSide};
pub use error::{ContractError, PricingError};
pub use time::{days_between, year_fraction, Date, DAYS_PER_YEAR};
