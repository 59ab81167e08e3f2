//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use distlab_sampling::simulation::{MAX_NUM_SAMPLES, MAX_SAMPLE_SIZE};

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "distlab.toml";

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
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

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Seed for every random draw; entropy when absent
    pub seed: Option<u64>,
    /// Default draws per sample for `clt simulate`
    pub sample_size: usize,
    /// Default number of samples for `clt simulate`
    pub num_samples: usize,
    /// Default number of draws for `clt population`
    pub population_size: usize,
    /// Grid size for continuous density curves
    pub curve_points: usize,
    /// Histogram bins
    pub histogram_bins: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            seed: None,
            sample_size: 30,
            num_samples: 1000,
            population_size: 10_000,
            curve_points: 1000,
            histogram_bins: 50,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{} has invalid value '{}'", name, raw)))
}

impl CliConfig {
    /// Override fields from `DISTLAB_*` variables returned by `lookup`
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DISTLAB_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup("DISTLAB_SEED") {
            self.seed = Some(parse_var("DISTLAB_SEED", &seed)?);
        }
        if let Some(size) = lookup("DISTLAB_SAMPLE_SIZE") {
            self.sample_size = parse_var("DISTLAB_SAMPLE_SIZE", &size)?;
        }
        if let Some(count) = lookup("DISTLAB_NUM_SAMPLES") {
            self.num_samples = parse_var("DISTLAB_NUM_SAMPLES", &count)?;
        }
        if let Some(points) = lookup("DISTLAB_CURVE_POINTS") {
            self.curve_points = parse_var("DISTLAB_CURVE_POINTS", &points)?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |name, value: usize| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        };

        if self.sample_size == 0 || self.sample_size > MAX_SAMPLE_SIZE {
            return Err(invalid("sample_size", self.sample_size));
        }
        if self.num_samples == 0 || self.num_samples > MAX_NUM_SAMPLES {
            return Err(invalid("num_samples", self.num_samples));
        }
        if self.population_size == 0 {
            return Err(invalid("population_size", self.population_size));
        }
        if self.curve_points < 2 {
            return Err(invalid("curve_points", self.curve_points));
        }
        if self.histogram_bins == 0 {
            return Err(invalid("histogram_bins", self.histogram_bins));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        Ok(())
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `distlab.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with a custom environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if default_file.is_file() => CliConfig::from_file(default_file)?,
        None => CliConfig::default(),
    };

    config.apply_vars(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
