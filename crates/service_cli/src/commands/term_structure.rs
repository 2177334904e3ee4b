//! Term structure command implementation
//!
//! Sweeps Black-Scholes prices and Greeks across a strip of expiry dates.

use std::io::Write;

use clap::Args;
use pricer_core::types::{Date, OptionSide};
use pricer_models::analytical::{term_structure, TermPoint};
use serde::Serialize;
use tracing::{info, warn};

use super::{emit, fixed, OutputFormat, Record, SideChoice};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `pricer term-structure`
#[derive(Debug, Clone, Args)]
pub struct TermStructureArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Annual volatility
    #[arg(long)]
    pub volatility: f64,

    /// Annual risk-free rate, defaults to the configured rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Valuation date (YYYY-MM-DD)
    #[arg(long)]
    pub valuation: Date,

    /// Comma-separated expiry dates (YYYY-MM-DD)
    #[arg(long, value_delimiter = ',', required = true)]
    pub expiries: Vec<Date>,

    /// Option side(s) to report
    #[arg(long, value_enum, default_value_t = SideChoice::Both)]
    pub side: SideChoice,
}

/// One expiry and side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRow {
    pub expiry: Date,
    pub days: u32,
    pub maturity: f64,
    pub side: OptionSide,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl TermRow {
    fn new(point: &TermPoint, side: OptionSide) -> Self {
        let greeks = point.greeks(side);
        Self {
            expiry: point.expiry,
            days: point.days,
            maturity: point.maturity,
            side,
            price: point.price(side),
            delta: greeks.delta,
            gamma: greeks.gamma,
            theta: greeks.theta,
            vega: greeks.vega,
            rho: greeks.rho,
        }
    }
}

impl Record for TermRow {
    const HEADERS: &'static [&'static str] = &[
        "Expiry", "Days", "T", "Side", "Price", "Delta", "Gamma", "Theta", "Vega", "Rho",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.expiry.to_string(),
            self.days.to_string(),
            fixed(self.maturity, 4),
            self.side.to_string(),
            fixed(self.price, 4),
            fixed(self.delta, 6),
            fixed(self.gamma, 6),
            fixed(self.theta, 4),
            fixed(self.vega, 4),
            fixed(self.rho, 4),
        ]
    }
}

/// Run the term-structure command
pub fn run<W: Write>(
    args: &TermStructureArgs,
    config: &CliConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let rows = term_rows(args, config)?;
    emit(out, format, &rows)
}

/// Values every expiry after the valuation date, expiry order preserved.
pub fn term_rows(args: &TermStructureArgs, config: &CliConfig) -> Result<Vec<TermRow>> {
    let points = term_structure(
        args.spot,
        args.strike,
        args.rate.unwrap_or(config.rate),
        args.volatility,
        args.valuation,
        &args.expiries,
    )?;

    let skipped = args.expiries.len() - points.len();
    if skipped > 0 {
        warn!(
            skipped,
            valuation = %args.valuation,
            "Expiries on or before the valuation date were skipped"
        );
    }
    info!(expiries = points.len(), "Term structure computed");

    Ok(points
        .iter()
        .flat_map(|point| args.side.sides().iter().map(move |&side| TermRow::new(point, side)))
        .collect())
}
