//! Greeks command implementation
//!
//! Black-Scholes price and sensitivities for the selected sides.

use std::io::Write;

use clap::Args;
use pricer_core::traits::PricingModel;
use pricer_core::types::OptionSide;
use pricer_models::analytical::{BlackScholes, Greeks};
use serde::Serialize;
use tracing::info;

use super::{emit, fixed, ContractArgs, OutputFormat, Record, SideChoice};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `pricer greeks`
#[derive(Debug, Clone, Args)]
pub struct GreeksArgs {
    /// Option side(s) to report
    #[arg(long, value_enum, default_value_t = SideChoice::Both)]
    pub side: SideChoice,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Price and Greeks of one side. Theta is per year; `theta_per_day` per
/// calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreeksRow {
    pub side: OptionSide,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub theta_per_day: f64,
    pub vega: f64,
    pub rho: f64,
}

impl GreeksRow {
    fn new(side: OptionSide, price: f64, greeks: &Greeks) -> Self {
        Self {
            side,
            price,
            delta: greeks.delta,
            gamma: greeks.gamma,
            theta: greeks.theta,
            theta_per_day: greeks.theta_per_day(),
            vega: greeks.vega,
            rho: greeks.rho,
        }
    }
}

impl Record for GreeksRow {
    const HEADERS: &'static [&'static str] = &[
        "Side", "Price", "Delta", "Gamma", "Theta", "Theta/day", "Vega", "Rho",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.side.to_string(),
            fixed(self.price, 4),
            fixed(self.delta, 6),
            fixed(self.gamma, 6),
            fixed(self.theta, 4),
            fixed(self.theta_per_day, 4),
            fixed(self.vega, 4),
            fixed(self.rho, 4),
        ]
    }
}

/// Run the greeks command
pub fn run<W: Write>(
    args: &GreeksArgs,
    config: &CliConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let rows = greeks_rows(args, config)?;
    info!(rows = rows.len(), "Computed Black-Scholes Greeks");
    emit(out, format, &rows)
}

/// Computes one row per selected side.
pub fn greeks_rows(args: &GreeksArgs, config: &CliConfig) -> Result<Vec<GreeksRow>> {
    let model = BlackScholes::new(args.contract.to_contract(config.rate)?)?;
    args.side
        .sides()
        .iter()
        .map(|&side| Ok(GreeksRow::new(side, model.price(side)?, &model.greeks(side)?)))
        .collect()
}
