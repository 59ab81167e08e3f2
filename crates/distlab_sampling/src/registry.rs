//! Population distributions available to the CLT simulator.
//!
//! Eight fixed parameterisations, listed in display order. Unlike the
//! explorer catalogue these entries have no adjustable parameters.

use distlab_core::traits::ParametricDistribution;
use distlab_core::types::{CatalogError, ParamValues};
use distlab_models::{DistributionModel, Family};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::simulation::SimulationError;

/// One registered population distribution.
#[derive(Debug, Clone, Copy)]
pub struct PopulationEntry {
    /// Display name, unique within the registry.
    pub name: &'static str,
    /// Distribution family.
    pub family: Family,
    /// Fixed parameter values.
    pub params: &'static [(&'static str, f64)],
    /// One-sentence description of where the distribution arises.
    pub description: &'static str,
}

impl PopulationEntry {
    /// Parameter values as a map.
    pub fn param_values(&self) -> ParamValues {
        self.params
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    /// Construct the distribution.
    ///
    /// # Errors
    ///
    /// `SimulationError::Distribution` if the family rejects the parameters.
    pub fn build(&self) -> Result<DistributionModel, SimulationError> {
        Ok(DistributionModel::build(self.family, &self.param_values())?)
    }
}

static REGISTRY: [PopulationEntry; 8] = [
    PopulationEntry {
        name: "Uniform[0,1]",
        family: Family::Uniform,
        params: &[("loc", 0.0), ("scale", 1.0)],
        description: "Every value in a fixed interval is equally likely, like the outcome of rolling a fair die.",
    },
    PopulationEntry {
        name: "Normal(0,1)",
        family: Family::Normal,
        params: &[("loc", 0.0), ("scale", 1.0)],
        description: "The bell curve followed by many natural quantities such as height and weight.",
    },
    PopulationEntry {
        name: "Exponential(1)",
        family: Family::Exponential,
        params: &[("scale", 1.0)],
        description: "The time between events, such as customer arrivals or equipment failures.",
    },
    PopulationEntry {
        name: "Poisson(3)",
        family: Family::Poisson,
        params: &[("mu", 3.0)],
        description: "The number of events in a fixed interval of time or space, such as calls received per hour.",
    },
    PopulationEntry {
        name: "Gamma(2,1)",
        family: Family::Gamma,
        params: &[("a", 2.0), ("scale", 1.0)],
        description: "A continuous waiting-time distribution, such as the time until the k-th event occurs.",
    },
    PopulationEntry {
        name: "Beta(2,5)",
        family: Family::Beta,
        params: &[("a", 2.0), ("b", 5.0)],
        description: "A continuous distribution on [0, 1], often used to describe probabilities or proportions.",
    },
    PopulationEntry {
        name: "Chi-squared(3)",
        family: Family::ChiSquared,
        params: &[("df", 3.0)],
        description: "A key distribution in statistics, used in hypothesis tests and confidence intervals.",
    },
    PopulationEntry {
        name: "Binomial(10,0.3)",
        family: Family::Binomial,
        params: &[("n", 10.0), ("p", 0.3)],
        description: "The number of successes in n independent trials, such as heads in repeated coin flips.",
    },
];

/// All registered entries in display order.
pub fn entries() -> &'static [PopulationEntry] {
    &REGISTRY
}

/// Look up the entry registered under `name`.
///
/// # Errors
///
/// `CatalogError::UnknownDistribution` if `name` is not registered.
pub fn lookup(name: &str) -> Result<&'static PopulationEntry, CatalogError> {
    REGISTRY
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| CatalogError::unknown(name))
}

/// Registered population names in display order.
///
/// # Example
///
/// ```
/// use distlab_sampling::registry::list_distributions;
///
/// let names = list_distributions();
/// assert_eq!(names.len(), 8);
/// assert_eq!(names[0], "Uniform[0,1]");
/// ```
pub fn list_distributions() -> Vec<&'static str> {
    REGISTRY.iter().map(|entry| entry.name).collect()
}

/// Plain-language description of `name`.
///
/// # Errors
///
/// `CatalogError::UnknownDistribution` for unknown names.
pub fn describe(name: &str) -> Result<&'static str, CatalogError> {
    Ok(lookup(name)?.description)
}

/// A population distribution with its theoretical moments.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionInfo {
    /// Registry name.
    pub name: &'static str,
    /// Fixed parameter values.
    pub params: ParamValues,
    /// Population mean.
    pub theoretical_mean: Option<f64>,
    /// Population variance.
    pub theoretical_var: Option<f64>,
    /// Population standard deviation.
    pub theoretical_std: Option<f64>,
    /// The constructed distribution.
    #[serde(skip)]
    pub distribution: DistributionModel,
}

/// Theoretical moments of `name`.
///
/// The three moments are reported together: if any is undefined, all are
/// `None`.
///
/// # Errors
///
/// `SimulationError::Catalog` for unknown names.
///
/// # Example
///
/// ```
/// use distlab_sampling::registry::distribution_info;
///
/// let info = distribution_info("Poisson(3)").unwrap();
/// assert_eq!(info.theoretical_mean, Some(3.0));
/// assert_eq!(info.theoretical_var, Some(3.0));
/// ```
pub fn distribution_info(name: &str) -> Result<DistributionInfo, SimulationError> {
    let entry = lookup(name)?;
    let distribution = entry.build()?;

    let moments = match (
        distribution.mean(),
        distribution.variance(),
        distribution.std_dev(),
    ) {
        (Some(mean), Some(var), Some(std)) => (Some(mean), Some(var), Some(std)),
        partial => {
            debug!(name, ?partial, "theoretical moments incomplete");
            (None, None, None)
        }
    };

    Ok(DistributionInfo {
        name: entry.name,
        params: entry.param_values(),
        theoretical_mean: moments.0,
        theoretical_var: moments.1,
        theoretical_std: moments.2,
        distribution,
    })
}

/// Draw `size` raw variates from the population `name`.
///
/// Used to display the population shape next to the sampling distribution.
///
/// # Errors
///
/// `SimulationError::Catalog` for unknown names.
pub fn generate_population_sample<R: Rng + ?Sized>(
    name: &str,
    size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    let distribution = lookup(name)?.build()?;
    debug!(name, size, "drawing population sample");
    Ok(distribution.sample_n(rng, size))
}
