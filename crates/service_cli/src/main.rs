//! distlab CLI - Distribution Explorer and CLT Simulator
//!
//! This is the command-line entry point for the distlab libraries.
//!
//! # Commands
//!
//! - `distlab clt list | describe | info | population | simulate` - Central
//!   Limit Theorem simulation over fixed population distributions
//! - `distlab explore list | spec | evaluate | curve | scenario | sample` -
//!   Parameterised distributions with moments, curves and scenarios
//!
//! Results are printed to stdout as JSON; logs go to stderr.
//!
//! # Configuration
//!
//! Settings are resolved as CLI arguments > `DISTLAB_*` environment
//! variables > TOML config file > defaults.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::{clt, explore, parse_param, parse_range};
use config::{build_config, CliArgs, CliConfig};

/// distlab - distribution explorer and CLT simulator
#[derive(Parser, Debug)]
#[command(name = "distlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Seed for reproducible random draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Central Limit Theorem simulator
    #[command(subcommand)]
    Clt(CltCommand),

    /// Distribution explorer
    #[command(subcommand)]
    Explore(ExploreCommand),
}

#[derive(Subcommand, Debug)]
enum CltCommand {
    /// List population distributions
    List,

    /// Describe a population distribution
    Describe {
        /// Population name, e.g. "Exponential(1)"
        name: String,
    },

    /// Show parameters and theoretical moments
    Info {
        /// Population name
        name: String,
    },

    /// Draw a population sample and bin it
    Population {
        /// Population name
        name: String,

        /// Number of draws
        #[arg(long)]
        size: Option<usize>,

        /// Include the raw draws in the output
        #[arg(long)]
        raw: bool,
    },

    /// Simulate the sampling distribution of the mean
    Simulate {
        /// Population name
        name: String,

        /// Draws per sample
        #[arg(short = 'n', long)]
        sample_size: Option<usize>,

        /// Number of samples
        #[arg(short = 'm', long)]
        num_samples: Option<usize>,

        /// Run Shapiro-Wilk and Kolmogorov-Smirnov tests on the means
        #[arg(long)]
        normality: bool,

        /// Include normal Q-Q data
        #[arg(long)]
        qq: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ExploreCommand {
    /// List distributions grouped by kind
    List,

    /// Show the parameter schema
    Spec {
        /// Distribution name, e.g. "Gamma"
        name: String,
    },

    /// Compute moments and quartiles
    Evaluate {
        /// Distribution name
        name: String,

        /// Parameter assignment key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, f64)>,
    },

    /// Evaluate the density or mass curve
    Curve {
        /// Distribution name
        name: String,

        /// Parameter assignment key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, f64)>,

        /// Display range lo,hi
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        range: Option<(f64, f64)>,

        /// Grid size for continuous distributions
        #[arg(long)]
        points: Option<usize>,
    },

    /// Show a real-world scenario
    Scenario {
        /// Distribution name
        name: String,

        /// Parameter assignment key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, f64)>,
    },

    /// Draw random variates
    Sample {
        /// Distribution name
        name: String,

        /// Parameter assignment key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, f64)>,

        /// Number of draws
        #[arg(long, default_value = "10")]
        size: usize,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(command: Commands, config: &CliConfig) -> Result<()> {
    match command {
        Commands::Clt(command) => match command {
            CltCommand::List => clt::list(),
            CltCommand::Describe { name } => clt::describe(&name),
            CltCommand::Info { name } => clt::info(&name),
            CltCommand::Population { name, size, raw } => clt::population(&name, size, raw, config),
            CltCommand::Simulate {
                name,
                sample_size,
                num_samples,
                normality,
                qq,
            } => {
                let options = clt::SimulateOptions {
                    sample_size,
                    num_samples,
                    normality,
                    qq,
                };
                clt::simulate(&name, &options, config)
            }
        },
        Commands::Explore(command) => match command {
            ExploreCommand::List => explore::list(),
            ExploreCommand::Spec { name } => explore::spec(&name),
            ExploreCommand::Evaluate { name, params } => explore::evaluate(&name, &params),
            ExploreCommand::Curve {
                name,
                params,
                range,
                points,
            } => explore::curve(&name, &params, range, points, config),
            ExploreCommand::Scenario { name, params } => explore::scenario(&name, &params),
            ExploreCommand::Sample { name, params, size } => {
                explore::sample(&name, &params, size, config)
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = CliArgs {
        config_file: cli.config,
        log_level: cli.log_level,
        seed: cli.seed,
    };
    let config = build_config(&args)?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "configuration loaded");

    dispatch(cli.command, &config)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "distlab",
            "--seed",
            "42",
            "clt",
            "simulate",
            "Uniform[0,1]",
            "-n",
            "30",
            "--num-samples",
            "1000",
            "--normality",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        match cli.command {
            Commands::Clt(CltCommand::Simulate {
                name,
                sample_size,
                num_samples,
                normality,
                qq,
            }) => {
                assert_eq!(name, "Uniform[0,1]");
                assert_eq!(sample_size, Some(30));
                assert_eq!(num_samples, Some(1000));
                assert!(normality);
                assert!(!qq);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_curve_with_negative_range() {
        let cli = Cli::try_parse_from([
            "distlab", "explore", "curve", "Normal", "-p", "loc=0", "--param", "scale=1",
            "--range", "-2,2",
        ])
        .unwrap();
        match cli.command {
            Commands::Explore(ExploreCommand::Curve { params, range, .. }) => {
                assert_eq!(
                    params,
                    vec![("loc".to_string(), 0.0), ("scale".to_string(), 1.0)]
                );
                assert_eq!(range, Some((-2.0, 2.0)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_param() {
        assert!(Cli::try_parse_from(["distlab", "explore", "evaluate", "Normal", "-p", "loc"]).is_err());
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let config = CliConfig::default();
        let err = dispatch(
            Commands::Explore(ExploreCommand::Spec {
                name: "Weibull".to_string(),
            }),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Catalog(_)));

        let err = dispatch(
            Commands::Clt(CltCommand::Info {
                name: "Weibull".to_string(),
            }),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Simulation(_)));
    }
}
