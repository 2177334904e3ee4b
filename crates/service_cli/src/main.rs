//! Pricer CLI - European option pricing from the command line
//!
//! # Commands
//!
//! - `pricer price` - Price a contract with Black-Scholes, binomial or Monte Carlo
//! - `pricer greeks` - Black-Scholes price and Greeks
//! - `pricer term-structure` - Prices and Greeks across expiry dates
//! - `pricer realised-vol` - Annualised volatility from a CSV of closes
//! - `pricer paths` - Sample Monte Carlo paths as rows
//!
//! Every command writes a table, JSON or CSV to stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::OutputFormat;
use config::{CliConfig, LogLevel};
pub use error::{CliError, Result};

/// European option pricer
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: PathBuf,

    /// Output format, defaults to the configured format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price(commands::price::PriceArgs),

    /// Black-Scholes price and Greeks
    Greeks(commands::greeks::GreeksArgs),

    /// Black-Scholes prices and Greeks across expiry dates
    TermStructure(commands::term_structure::TermStructureArgs),

    /// Annualised realised volatility from a CSV of closing prices
    RealisedVol(commands::volatility::VolatilityArgs),

    /// Print sample Monte Carlo paths
    Paths(commands::paths::PathsArgs),
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::resolve(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    init_tracing(if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    });
    debug!(?config, "Configuration resolved");

    let format = cli.format.unwrap_or(config.format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config, format, &mut out),
        Commands::Greeks(args) => commands::greeks::run(args, &config, format, &mut out),
        Commands::TermStructure(args) => {
            commands::term_structure::run(args, &config, format, &mut out)
        }
        Commands::RealisedVol(args) => commands::volatility::run(args, &config, format, &mut out),
        Commands::Paths(args) => commands::paths::run(args, &config, format, &mut out),
    }?;

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_price_with_days() {
        let cli = Cli::try_parse_from([
            "pricer", "price", "--model", "monte-carlo", "--side", "call", "--spot", "100",
            "--strike", "95", "--days", "30", "--volatility", "0.25", "--rate", "-0.01",
            "--paths", "1000", "--seed", "7", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Price(args) => {
                assert_eq!(args.model, commands::ModelKind::MonteCarlo);
                assert_eq!(args.contract.days, Some(30));
                assert_eq!(args.contract.rate, Some(-0.01));
                assert_eq!(args.seed, Some(7));
            }
            _ => panic!("Expected price command"),
        }
    }

    #[test]
    fn test_days_and_expiry_conflict() {
        let parsed = Cli::try_parse_from([
            "pricer", "greeks", "--spot", "100", "--strike", "100", "--days", "30",
            "--expiry", "2025-01-17", "--volatility", "0.2",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_term_structure_expiry_list() {
        let cli = Cli::try_parse_from([
            "pricer", "term-structure", "--spot", "250", "--strike", "260",
            "--volatility", "0.3", "--valuation", "2024-12-12",
            "--expiries", "2024-12-20,2025-01-17",
        ])
        .unwrap();
        match cli.command {
            Commands::TermStructure(args) => assert_eq!(args.expiries.len(), 2),
            _ => panic!("Expected term-structure command"),
        }
    }

    #[test]
    fn test_bad_date_rejected() {
        let parsed = Cli::try_parse_from([
            "pricer", "price", "--spot", "100", "--strike", "100", "--expiry", "17/01/2025",
            "--volatility", "0.2",
        ]);
        assert!(parsed.is_err());
    }
}
