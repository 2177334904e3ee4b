//! # pricer_core: Foundation types for the option pricing engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Contract types: `OptionContract`, `OptionSide` (`types::contract`)
//! - Time types: `Date`, ACT/365 `year_fraction` (`types::time`)
//! - Error types: `PricingError`, `ContractError` (`types::error`)
//! - The `PricingModel` trait implemented by every model (`traits`)
//! - Realised volatility from closing prices (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Date, OptionContract, OptionSide};
//!
//! let valuation = Date::from_ymd(2024, 12, 12).unwrap();
//! let expiry = Date::from_ymd(2024, 12, 20).unwrap();
//! let days = valuation.days_until(expiry) as u32;
//!
//! let contract = OptionContract::from_days(250.0, 260.0, days, 0.04, 0.3).unwrap();
//! assert_eq!(contract.calendar_days(), 8);
//!
//! let side: OptionSide = "call".parse().unwrap();
//! assert_eq!(contract.intrinsic_value(side), 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for contracts, sides and dates

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;
