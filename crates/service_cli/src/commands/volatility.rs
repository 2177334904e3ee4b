//! Realised volatility command implementation
//!
//! Reads a column of closing prices from a CSV file and annualises the
//! standard deviation of their returns.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use pricer_core::market_data::{realised_volatility, ReturnKind, TRADING_DAYS_PER_YEAR};
use serde::Serialize;
use tracing::info;

use super::{emit, fixed, OutputFormat, Record};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Arguments of `pricer realised-vol`
#[derive(Debug, Clone, Args)]
pub struct VolatilityArgs {
    /// CSV file with a header row
    #[arg(short, long)]
    pub prices: PathBuf,

    /// Column holding the closing prices (case-insensitive)
    #[arg(long, default_value = "Close")]
    pub column: String,

    /// Use log returns instead of percent changes
    #[arg(long)]
    pub log_returns: bool,

    /// Return periods per year
    #[arg(long, default_value_t = TRADING_DAYS_PER_YEAR)]
    pub periods_per_year: f64,
}

/// Realised volatility of one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityRow {
    pub source: String,
    pub column: String,
    pub observations: usize,
    pub returns: ReturnKind,
    pub volatility: f64,
}

impl Record for VolatilityRow {
    const HEADERS: &'static [&'static str] =
        &["Source", "Column", "Observations", "Returns", "Volatility"];

    fn cells(&self) -> Vec<String> {
        let returns = match self.returns {
            ReturnKind::Simple => "simple",
            ReturnKind::Log => "log",
        };
        vec![
            self.source.clone(),
            self.column.clone(),
            self.observations.to_string(),
            returns.to_string(),
            fixed(self.volatility, 6),
        ]
    }
}

/// Run the realised-vol command
pub fn run<W: Write>(
    args: &VolatilityArgs,
    _config: &CliConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if !args.prices.exists() {
        return Err(CliError::FileNotFound(args.prices.display().to_string()));
    }

    let file = std::fs::File::open(&args.prices)?;
    let closes = read_closes(file, &args.column)?;
    info!(
        source = %args.prices.display(),
        observations = closes.len(),
        "Loaded closing prices"
    );

    let row = volatility_row(args, args.prices.display().to_string(), &closes)?;
    emit(out, format, &[row])
}

/// Computes the realised volatility row for a loaded series.
pub fn volatility_row(args: &VolatilityArgs, source: String, closes: &[f64]) -> Result<VolatilityRow> {
    let kind = if args.log_returns {
        ReturnKind::Log
    } else {
        ReturnKind::Simple
    };
    let volatility = realised_volatility(closes, kind, args.periods_per_year)?;

    Ok(VolatilityRow {
        source,
        column: args.column.clone(),
        observations: closes.len(),
        returns: kind,
        volatility,
    })
}

/// Reads the named column as prices. Blank cells are skipped.
pub fn read_closes<R: Read>(reader: R, column: &str) -> Result<Vec<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let index = csv_reader
        .headers()?
        .iter()
        .position(|h| h.eq_ignore_ascii_case(column))
        .ok_or_else(|| CliError::InvalidArgument(format!("column '{}' not found", column)))?;

    let mut closes = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record?;
        match record.get(index) {
            None | Some("") => continue,
            Some(raw) => {
                let value = raw.parse::<f64>().map_err(|e| {
                    // +2: header row and 1-based numbering
                    CliError::Parse(format!("row {}: '{}' is not a price: {}", line + 2, raw, e))
                })?;
                closes.push(value);
            }
        }
    }
    Ok(closes)
}
