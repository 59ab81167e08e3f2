//! CLT simulator commands
//!
//! Population listing, moments, population draws and sampling runs.

use distlab_core::math::stats;
use distlab_models::explorer::DensityCurve;
use distlab_sampling::normality::{qq_plot, QqPlot};
use distlab_sampling::registry::{self, DistributionInfo};
use distlab_sampling::rng::SamplerRng;
use distlab_sampling::simulation::{run_simulation, SamplingRun, SimulationConfig};
use distlab_sampling::{histogram, normality_test, Histogram, NormalityTest};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::config::CliConfig;
use crate::Result;

/// Points of the CLT overlay curve
const OVERLAY_POINTS: usize = 100;

#[derive(Serialize)]
struct PopulationSummary {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct InfoOutput {
    description: &'static str,
    #[serde(flatten)]
    info: DistributionInfo,
}

#[derive(Serialize)]
struct PopulationOutput {
    name: String,
    seed: u64,
    size: usize,
    mean: Option<f64>,
    std: Option<f64>,
    histogram: Histogram,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<f64>>,
}

#[derive(Serialize)]
struct SimulateOutput {
    #[serde(flatten)]
    run: SamplingRun,
    mean_gap: Option<f64>,
    std_gap: Option<f64>,
    histogram: Histogram,
    theoretical_curve: Option<DensityCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normality: Option<NormalityTest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    qq: Option<QqPlot>,
}

/// Options of `clt simulate`
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    pub sample_size: Option<usize>,
    pub num_samples: Option<usize>,
    pub normality: bool,
    pub qq: bool,
}

/// List the population distributions with their descriptions
pub fn list() -> Result<()> {
    let summaries: Vec<PopulationSummary> = registry::entries()
        .iter()
        .map(|entry| PopulationSummary {
            name: entry.name,
            description: entry.description,
        })
        .collect();
    print_json(&summaries)
}

/// Print the description of one population
pub fn describe(name: &str) -> Result<()> {
    let description = registry::describe(name)?;
    println!("{}", description);
    Ok(())
}

/// Print the parameters and theoretical moments of one population
pub fn info(name: &str) -> Result<()> {
    let info = registry::distribution_info(name)?;
    let output = InfoOutput {
        description: registry::describe(name)?,
        info,
    };
    print_json(&output)
}

/// Draw a population sample and print its histogram
pub fn population(name: &str, size: Option<usize>, raw: bool, config: &CliConfig) -> Result<()> {
    let size = size.unwrap_or(config.population_size);
    let mut rng = SamplerRng::from_optional_seed(config.seed);
    info!(name, size, seed = rng.seed(), "drawing population sample");

    let values = registry::generate_population_sample(name, size, &mut rng)?;
    let output = PopulationOutput {
        name: name.to_string(),
        seed: rng.seed(),
        size,
        mean: stats::mean(&values),
        std: stats::sample_std(&values),
        histogram: histogram(&values, config.histogram_bins, false),
        values: raw.then_some(values),
    };
    print_json(&output)
}

/// Run a CLT simulation and print the sample means with their diagnostics
pub fn simulate(name: &str, options: &SimulateOptions, config: &CliConfig) -> Result<()> {
    let simulation = SimulationConfig::builder()
        .sample_size(options.sample_size.unwrap_or(config.sample_size))
        .num_samples(options.num_samples.unwrap_or(config.num_samples))
        .maybe_seed(config.seed)
        .build()
        .map_err(distlab_sampling::SimulationError::from)?;

    let run = run_simulation(name, &simulation)?;

    let statistics = &run.statistics;
    let output = SimulateOutput {
        mean_gap: statistics.mean_gap(),
        std_gap: statistics.std_gap(),
        histogram: histogram(&run.sample_means, config.histogram_bins, true),
        theoretical_curve: statistics.theoretical_curve(&run.sample_means, OVERLAY_POINTS),
        normality: options.normality.then(|| normality_test(&run.sample_means)),
        qq: options.qq.then(|| qq_plot(&run.sample_means)),
        run,
    };
    print_json(&output)
}

