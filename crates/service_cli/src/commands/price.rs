//! Price command implementation
//!
//! Prices one contract with the selected model. Monte Carlo rows also carry
//! the standard error, path count and the seed actually used.

use std::io::Write;

use clap::Args;
use pricer_core::traits::PricingModel;
use pricer_core::types::{OptionContract, OptionSide};
use pricer_models::analytical::BlackScholes;
use pricer_models::lattice::BinomialTree;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloModel};
use serde::Serialize;
use tracing::info;

use super::{emit, fixed, ContractArgs, ModelKind, OutputFormat, Record, SideChoice};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `pricer price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Pricing model
    #[arg(short, long, value_enum, default_value_t = ModelKind::BlackScholes)]
    pub model: ModelKind,

    /// Option side(s) to price
    #[arg(long, value_enum, default_value_t = SideChoice::Both)]
    pub side: SideChoice,

    #[command(flatten)]
    pub contract: ContractArgs,

    /// Binomial lattice steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One priced side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub model: &'static str,
    pub side: OptionSide,
    pub price: f64,
    pub steps: Option<usize>,
    pub std_error: Option<f64>,
    pub n_paths: Option<usize>,
    pub seed: Option<u64>,
}

impl Record for PriceRow {
    const HEADERS: &'static [&'static str] =
        &["Model", "Side", "Price", "Steps", "Std Error", "Paths", "Seed"];

    fn cells(&self) -> Vec<String> {
        let opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        vec![
            self.model.to_string(),
            self.side.to_string(),
            fixed(self.price, 4),
            opt(self.steps.map(|s| s.to_string())),
            opt(self.std_error.map(|e| fixed(e, 4))),
            opt(self.n_paths.map(|n| n.to_string())),
            opt(self.seed.map(|s| s.to_string())),
        ]
    }
}

/// Run the price command
pub fn run<W: Write>(
    args: &PriceArgs,
    config: &CliConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let contract = args.contract.to_contract(config.rate)?;
    info!(
        model = %args.model,
        spot = contract.spot(),
        strike = contract.strike(),
        maturity = contract.maturity(),
        "Pricing contract"
    );

    let rows = price_rows(args, config, contract)?;
    emit(out, format, &rows)
}

/// Prices the selected sides of `contract`.
pub fn price_rows(
    args: &PriceArgs,
    config: &CliConfig,
    contract: OptionContract,
) -> Result<Vec<PriceRow>> {
    let sides = args.side.sides();
    match args.model {
        ModelKind::BlackScholes => {
            let model = BlackScholes::new(contract)?;
            model_rows(&model, args.model, sides, None)
        }
        ModelKind::Binomial => {
            let steps = args.steps.unwrap_or(config.steps);
            let model = BinomialTree::new(contract, steps)?;
            model_rows(&model, args.model, sides, Some(steps))
        }
        ModelKind::MonteCarlo => {
            let mc_config = MonteCarloConfig::builder()
                .n_paths(args.paths.unwrap_or(config.paths))
                .maybe_seed(args.seed.or(config.seed))
                .parallel(config.parallel)
                .build()?;
            let mut model = MonteCarloModel::new(contract, mc_config)?;
            let seed = model.simulate().seed();
            info!(seed, n_steps = model.n_steps(), "Simulation complete");

            sides
                .iter()
                .map(|&side| {
                    let estimate = model.estimate(side)?;
                    Ok(PriceRow {
                        model: args.model.as_str(),
                        side,
                        price: estimate.price,
                        steps: Some(model.n_steps()),
                        std_error: Some(estimate.std_error),
                        n_paths: Some(estimate.n_paths),
                        seed: Some(seed),
                    })
                })
                .collect()
        }
    }
}

fn model_rows<M: PricingModel>(
    model: &M,
    kind: ModelKind,
    sides: &[OptionSide],
    steps: Option<usize>,
) -> Result<Vec<PriceRow>> {
    sides
        .iter()
        .map(|&side| {
            Ok(PriceRow {
                model: kind.as_str(),
                side,
                price: model.price(side)?,
                steps,
                std_error: None,
                n_paths: None,
                seed: None,
            })
        })
        .collect()
}
