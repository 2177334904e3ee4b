//! CLI configuration management.
//!
//! Defaults are read from a TOML file (`pricer.toml` unless `--config`
//! names another), then `PRICER_*` environment variables override them.
//! Command-line flags override both and are applied by each command.
//!
//! ```toml
//! rate = 0.05
//! steps = 500
//! paths = 10000
//! seed = 42
//! parallel = true
//! log_level = "info"
//! format = "table"
//! ```

use std::path::Path;

use pricer_models::lattice::MAX_STEPS as MAX_LATTICE_STEPS;
use pricer_pricing::mc::{DEFAULT_PATHS, MAX_PATHS};
use serde::Deserialize;
use thiserror::Error;

use crate::commands::OutputFormat;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that failed to load
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`CliConfig`]
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable holds an unusable value
    #[error("Invalid value for {name}: '{value}'")]
    Env {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },

    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name
    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    /// One or more fields out of range
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Defaults shared by every subcommand
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Risk-free rate used when `--rate` is absent
    pub rate: f64,
    /// Lattice steps used when `--steps` is absent
    pub steps: usize,
    /// Monte Carlo paths used when `--paths` is absent
    pub paths: usize,
    /// Monte Carlo seed; `None` draws a fresh one per run
    pub seed: Option<u64>,
    /// Whether Monte Carlo paths may be generated in parallel
    pub parallel: bool,
    /// Log level when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Output format when `--format` is absent
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rate: 0.05,
            steps: 500,
            paths: DEFAULT_PATHS,
            seed: None,
            parallel: true,
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PRICER_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PRICER_RATE") {
            self.rate = parse_env("PRICER_RATE", &value)?;
        }

        if let Some(value) = lookup("PRICER_STEPS") {
            self.steps = parse_env("PRICER_STEPS", &value)?;
        }

        if let Some(value) = lookup("PRICER_PATHS") {
            self.paths = parse_env("PRICER_PATHS", &value)?;
        }

        if let Some(value) = lookup("PRICER_SEED") {
            self.seed = match value.trim() {
                "" | "none" => None,
                raw => Some(parse_env("PRICER_SEED", raw)?),
            };
        }

        if let Some(value) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = value.parse()?;
        }

        if let Some(value) = lookup("PRICER_FORMAT") {
            self.format = value.parse()?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.rate.is_finite() {
            errors.push(format!("rate must be finite, got {}", self.rate));
        }

        if self.steps == 0 || self.steps > MAX_LATTICE_STEPS {
            errors.push(format!(
                "steps must be in [1, {}], got {}",
                MAX_LATTICE_STEPS, self.steps
            ));
        }

        if self.paths == 0 || self.paths > MAX_PATHS {
            errors.push(format!(
                "paths must be in [1, {}], got {}",
                MAX_PATHS, self.paths
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        name,
        value: value.to_string(),
    })
}
