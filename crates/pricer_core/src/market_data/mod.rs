//! Market inputs derived from historical data.
//!
//! - [`volatility`]: realised volatility from a close series

pub mod volatility;

pub use volatility::{
    log_returns, realised_volatility, simple_returns, ReturnKind, TRADING_DAYS_PER_YEAR,
};
