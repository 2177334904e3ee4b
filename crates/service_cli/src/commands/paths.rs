//! Paths command implementation
//!
//! Simulates GBM paths for a contract and prints the first few of them,
//! one row per daily step, with the strike alongside for reference.

use std::io::Write;

use clap::Args;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloModel, PathMatrix};
use serde::Serialize;
use tracing::info;

use super::{fixed, render_table, ContractArgs, OutputFormat};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `pricer paths`
#[derive(Debug, Clone, Args)]
pub struct PathsArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Number of paths to simulate
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Number of paths to print
    #[arg(long, default_value_t = 5)]
    pub show: usize,

    /// Simulation seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Sampled paths for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSample {
    pub seed: u64,
    pub n_paths: usize,
    pub n_steps: usize,
    pub strike: f64,
    pub paths: Vec<Vec<f64>>,
}

impl PathSample {
    fn from_matrix(matrix: &PathMatrix, strike: f64, show: usize) -> Self {
        Self {
            seed: matrix.seed(),
            n_paths: matrix.n_paths(),
            n_steps: matrix.n_steps(),
            strike,
            paths: matrix.sample_paths(show).map(<[f64]>::to_vec).collect(),
        }
    }

    /// Column titles: step, one per path, strike.
    fn headers(&self) -> Vec<String> {
        std::iter::once("step".to_string())
            .chain((0..self.paths.len()).map(|i| format!("path_{}", i)))
            .chain(std::iter::once("strike".to_string()))
            .collect()
    }

    /// One row per time step.
    fn step_rows(&self, format_value: impl Fn(f64) -> String) -> Vec<Vec<String>> {
        (0..=self.n_steps)
            .map(|step| {
                std::iter::once(step.to_string())
                    .chain(self.paths.iter().map(|path| format_value(path[step])))
                    .chain(std::iter::once(format_value(self.strike)))
                    .collect()
            })
            .collect()
    }
}

/// Run the paths command
pub fn run<W: Write>(
    args: &PathsArgs,
    config: &CliConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let sample = simulate_sample(args, config)?;
    info!(
        seed = sample.seed,
        n_paths = sample.n_paths,
        shown = sample.paths.len(),
        "Simulated paths"
    );

    match format {
        OutputFormat::Table => {
            render_table(out, &sample.headers(), &sample.step_rows(|v| fixed(v, 4)))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &sample)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(sample.headers())?;
            for row in sample.step_rows(|v| v.to_string()) {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Simulates the contract and keeps the first `show` paths.
pub fn simulate_sample(args: &PathsArgs, config: &CliConfig) -> Result<PathSample> {
    let contract = args.contract.to_contract(config.rate)?;
    let mc_config = MonteCarloConfig::builder()
        .n_paths(args.paths.unwrap_or(config.paths))
        .maybe_seed(args.seed.or(config.seed))
        .parallel(config.parallel)
        .build()?;

    let mut model = MonteCarloModel::new(contract, mc_config)?;
    let matrix = model.simulate();
    Ok(PathSample::from_matrix(matrix, contract.strike(), args.show))
}
