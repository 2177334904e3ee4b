//! CLI command implementations
//!
//! Each submodule implements one subcommand. Shared pieces live here: the
//! contract arguments, model and side selectors, and output rendering.

pub mod greeks;
pub mod paths;
pub mod price;
pub mod term_structure;
pub mod volatility;

use std::fmt;
use std::io::{self, Write};

use clap::{Args, ValueEnum};
use pricer_core::types::{days_between, Date, OptionContract, OptionSide};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Pricing model selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Closed-form Black-Scholes
    BlackScholes,
    /// Cox-Ross-Rubinstein binomial lattice
    Binomial,
    /// Monte Carlo over daily GBM paths
    MonteCarlo,
}

impl ModelKind {
    /// Label used in output
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::BlackScholes => "black-scholes",
            ModelKind::Binomial => "binomial",
            ModelKind::MonteCarlo => "monte-carlo",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which option sides to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SideChoice {
    Call,
    Put,
    #[default]
    Both,
}

impl SideChoice {
    /// The selected sides, call first
    pub fn sides(self) -> &'static [OptionSide] {
        match self {
            SideChoice::Call => &[OptionSide::Call],
            SideChoice::Put => &[OptionSide::Put],
            SideChoice::Both => &OptionSide::ALL,
        }
    }
}

/// Contract parameters shared by the single-contract commands
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Calendar days to expiry
    #[arg(long, conflicts_with = "expiry", required_unless_present = "expiry")]
    pub days: Option<u32>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry: Option<Date>,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "expiry")]
    pub valuation: Option<Date>,

    /// Annual risk-free rate, defaults to the configured rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Annual volatility (0.2 = 20%)
    #[arg(long)]
    pub volatility: f64,
}

impl ContractArgs {
    /// Calendar days from valuation to expiry.
    pub fn days_to_expiry(&self) -> Result<u32> {
        match (self.days, self.expiry) {
            (Some(days), _) => Ok(days),
            (None, Some(expiry)) => {
                let valuation = self.valuation.unwrap_or_else(Date::today);
                let days = days_between(valuation, expiry);
                u32::try_from(days)
                    .ok()
                    .filter(|&d| d > 0)
                    .ok_or_else(|| {
                        CliError::InvalidArgument(format!(
                            "expiry {} must be after valuation date {}",
                            expiry, valuation
                        ))
                    })
            }
            (None, None) => Err(CliError::InvalidArgument(
                "one of --days or --expiry is required".to_string(),
            )),
        }
    }

    /// Builds the contract, using `default_rate` when `--rate` is absent.
    pub fn to_contract(&self, default_rate: f64) -> Result<OptionContract> {
        let days = self.days_to_expiry()?;
        Ok(OptionContract::from_days(
            self.spot,
            self.strike,
            days,
            self.rate.unwrap_or(default_rate),
            self.volatility,
        )?)
    }
}

/// A result row that can be rendered in every [`OutputFormat`].
pub trait Record: Serialize {
    /// Column titles for table output
    const HEADERS: &'static [&'static str];

    /// Formatted cells for table output, one per header
    fn cells(&self) -> Vec<String>;
}

/// Writes `rows` to `out` in the requested format.
pub fn emit<W: Write, R: Record>(out: &mut W, format: OutputFormat, rows: &[R]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows.iter().map(Record::cells).collect();
            render_table(out, R::HEADERS, &cells)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Draws a box table.
pub fn render_table<W: Write, H: AsRef<str>>(
    out: &mut W,
    headers: &[H],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: char, mid: char, right: char| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    writeln!(out, "{}", rule('┌', '┬', '┐'))?;
    writeln!(out, "{}", line(headers.iter().map(|h| h.as_ref()).collect()))?;
    writeln!(out, "{}", rule('├', '┼', '┤'))?;
    for row in rows {
        writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
    }
    writeln!(out, "{}", rule('└', '┴', '┘'))
}

/// Fixed-point cell.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract_args(days: Option<u32>, expiry: Option<&str>, valuation: Option<&str>) -> ContractArgs {
        ContractArgs {
            spot: 100.0,
            strike: 100.0,
            days,
            expiry: expiry.map(|s| Date::parse(s).unwrap()),
            valuation: valuation.map(|s| Date::parse(s).unwrap()),
            rate: None,
            volatility: 0.2,
        }
    }

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        value: f64,
    }

    impl Record for Row {
        const HEADERS: &'static [&'static str] = &["Name", "Value"];

        fn cells(&self) -> Vec<String> {
            vec![self.name.to_string(), fixed(self.value, 2)]
        }
    }

    fn rendered(format: OutputFormat) -> String {
        let rows = [Row { name: "a", value: 1.5 }, Row { name: "long-name", value: 10.0 }];
        let mut out = Vec::new();
        emit(&mut out, format, &rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ==========================================================
    // Contract Argument Tests
    // ==========================================================

    #[test]
    fn test_days_take_precedence() {
        let args = contract_args(Some(30), None, None);
        assert_eq!(args.days_to_expiry().unwrap(), 30);
        let contract = args.to_contract(0.04).unwrap();
        assert_eq!(contract.rate(), 0.04);
        assert_eq!(contract.calendar_days(), 30);
    }

    #[test]
    fn test_expiry_counts_calendar_days() {
        let args = contract_args(None, Some("2025-01-17"), Some("2024-12-12"));
        assert_eq!(args.days_to_expiry().unwrap(), 36);
    }

    #[test]
    fn test_expiry_not_after_valuation_rejected() {
        let same_day = contract_args(None, Some("2024-12-12"), Some("2024-12-12"));
        assert!(matches!(same_day.days_to_expiry(), Err(CliError::InvalidArgument(_))));

        let past = contract_args(None, Some("2024-11-01"), Some("2024-12-12"));
        assert!(matches!(past.days_to_expiry(), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_expiry_rejected() {
        assert!(matches!(
            contract_args(None, None, None).days_to_expiry(),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_contract_propagates() {
        let mut args = contract_args(Some(30), None, None);
        args.volatility = -0.1;
        assert!(matches!(args.to_contract(0.05), Err(CliError::Pricing(_))));
    }

    #[test]
    fn test_side_choice() {
        assert_eq!(SideChoice::Both.sides(), &OptionSide::ALL);
        assert_eq!(SideChoice::Put.sides(), &[OptionSide::Put]);
    }

    // ==========================================================
    // Rendering Tests
    // ==========================================================

    #[test]
    fn test_table_output() {
        let text = rendered(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Name") && lines[1].contains("Value"));
        assert!(lines[3].contains("1.50"));
        assert!(lines[4].contains("long-name"));
        // Every line has the same display width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json)).unwrap();
        assert_eq!(value[1]["name"], "long-name");
        assert_eq!(value[0]["value"], 1.5);
    }

    #[test]
    fn test_csv_output() {
        assert_eq!(rendered(OutputFormat::Csv), "name,value\na,1.5\nlong-name,10.0\n");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
