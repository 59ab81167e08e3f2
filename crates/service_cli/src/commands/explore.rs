//! Distribution explorer commands
//!
//! Parameters arrive as `key=value` pairs and are clamped by the catalogue
//! before use; the clamped values are echoed in every output.

use distlab_core::types::ParamValues;
use distlab_models::explorer::{
    clamp_params, density_curve_with_points, evaluate as evaluate_distribution, list_by_kind,
    param_spec, sample as sample_distribution, scenario_text, DensityCurve,
};
use distlab_sampling::rng::SamplerRng;
use serde::Serialize;
use tracing::{debug, info};

use super::print_json;
use crate::config::CliConfig;
use crate::Result;

#[derive(Serialize)]
struct CurveOutput {
    name: String,
    params: ParamValues,
    #[serde(flatten)]
    curve: DensityCurve,
}

#[derive(Serialize)]
struct ScenarioOutput {
    name: String,
    params: ParamValues,
    scenario: String,
}

#[derive(Serialize)]
struct SampleOutput {
    name: String,
    params: ParamValues,
    seed: u64,
    values: Vec<f64>,
}

fn collect_params(pairs: &[(String, f64)]) -> ParamValues {
    let params: ParamValues = pairs.iter().cloned().collect();
    debug!(?params, "raw parameters");
    params
}

/// List catalogue names grouped by kind
pub fn list() -> Result<()> {
    print_json(&list_by_kind())
}

/// Print the parameter schema of one distribution
pub fn spec(name: &str) -> Result<()> {
    print_json(&param_spec(name)?)
}

/// Print moments and quartiles
pub fn evaluate(name: &str, pairs: &[(String, f64)]) -> Result<()> {
    let result = evaluate_distribution(name, &collect_params(pairs))?;
    print_json(&result)
}

/// Print the density or mass curve
pub fn curve(
    name: &str,
    pairs: &[(String, f64)],
    range: Option<(f64, f64)>,
    points: Option<usize>,
    config: &CliConfig,
) -> Result<()> {
    let raw = collect_params(pairs);
    let points = points.unwrap_or(config.curve_points);
    let curve = density_curve_with_points(name, &raw, range, points)?;
    info!(name, points = curve.len(), "density curve evaluated");

    print_json(&CurveOutput {
        name: name.to_string(),
        params: clamp_params(name, &raw)?,
        curve,
    })
}

/// Print the real-world scenario text
pub fn scenario(name: &str, pairs: &[(String, f64)]) -> Result<()> {
    let raw = collect_params(pairs);
    let params = clamp_params(name, &raw)?;
    print_json(&ScenarioOutput {
        name: name.to_string(),
        scenario: scenario_text(name, &raw),
        params,
    })
}

/// Draw random variates
pub fn sample(name: &str, pairs: &[(String, f64)], size: usize, config: &CliConfig) -> Result<()> {
    let raw = collect_params(pairs);
    let mut rng = SamplerRng::from_optional_seed(config.seed);
    let values = sample_distribution(name, &raw, size, &mut rng)?;

    print_json(&SampleOutput {
        name: name.to_string(),
        params: clamp_params(name, &raw)?,
        seed: rng.seed(),
        values,
    })
}
