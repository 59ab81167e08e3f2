//! Repeated sampling and the statistics of the sample means.

use distlab_core::math::stats;
use distlab_core::traits::{defined, ParametricDistribution};
use distlab_models::explorer::DensityCurve;
use distlab_models::families::Normal;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::config::SimulationConfig;
use super::error::SimulationError;
use crate::registry::distribution_info;
use crate::rng::SamplerRng;

/// Statistics of the sampling distribution of the mean.
///
/// Empirical values describe the collected sample means; theoretical values
/// are what the CLT predicts from the population moments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingStatistics {
    /// Mean of the sample means.
    pub sample_mean_mean: Option<f64>,
    /// Variance of the sample means (divisor `m - 1`).
    pub sample_mean_var: Option<f64>,
    /// Standard deviation of the sample means (divisor `m - 1`).
    pub sample_mean_std: Option<f64>,
    /// Population mean.
    pub theoretical_mean: Option<f64>,
    /// Standard error `σ / √n`.
    pub theoretical_std_of_means: Option<f64>,
    /// Draws per sample.
    pub sample_size: usize,
    /// Number of samples.
    pub num_samples: usize,
}

impl SamplingStatistics {
    /// `|empirical mean - theoretical mean|`.
    pub fn mean_gap(&self) -> Option<f64> {
        let (empirical, theoretical) = self.sample_mean_mean.zip(self.theoretical_mean)?;
        defined((empirical - theoretical).abs())
    }

    /// `|empirical std - standard error|`.
    pub fn std_gap(&self) -> Option<f64> {
        let (empirical, theoretical) = self.sample_mean_std.zip(self.theoretical_std_of_means)?;
        defined((empirical - theoretical).abs())
    }

    /// Normal density predicted by the CLT, evaluated over the observed range
    /// of `sample_means`.
    ///
    /// `None` when the theoretical values are undefined, the standard error
    /// is zero or `sample_means` has no finite values.
    pub fn theoretical_curve(&self, sample_means: &[f64], points: usize) -> Option<DensityCurve> {
        let mean = self.theoretical_mean?;
        let std = self.theoretical_std_of_means.filter(|s| *s > 0.0)?;
        let normal = Normal::new(mean, std).ok()?;
        let (lo, hi) = stats::min_max(sample_means)
            .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())?;

        let x = stats::linspace(lo, hi, points);
        let y = x.iter().map(|&x| normal.density(x)).collect();
        Some(DensityCurve { x, y })
    }
}

/// Output of one sampling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingRun {
    /// Population name.
    pub distribution: &'static str,
    /// One mean per sample, in draw order.
    pub sample_means: Vec<f64>,
    /// Statistics of `sample_means`.
    pub statistics: SamplingStatistics,
    /// Seed of the generator, when the run created its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Draw `num_samples` samples of `sample_size` variates from the population
/// `name` and summarise their means.
///
/// # Errors
///
/// - `SimulationError::Config` for sizes outside the configured bounds,
///   before any variate is drawn
/// - `SimulationError::Catalog` for unknown names
///
/// # Example
///
/// ```
/// use distlab_sampling::rng::SamplerRng;
/// use distlab_sampling::simulation::simulate_sampling;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let run = simulate_sampling("Exponential(1)", 50, 200, &mut rng).unwrap();
///
/// assert_eq!(run.sample_means.len(), 200);
/// assert_eq!(run.statistics.theoretical_mean, Some(1.0));
/// ```
pub fn simulate_sampling<R: Rng + ?Sized>(
    name: &str,
    sample_size: usize,
    num_samples: usize,
    rng: &mut R,
) -> Result<SamplingRun, SimulationError> {
    let config = SimulationConfig::new(sample_size, num_samples)?;
    simulate_with_config(name, &config, rng)
}

/// Run a simulation with its own generator, seeded from the configuration
/// or from entropy.
///
/// The seed used is reported in [`SamplingRun::seed`].
pub fn run_simulation(name: &str, config: &SimulationConfig) -> Result<SamplingRun, SimulationError> {
    let mut rng = SamplerRng::from_optional_seed(config.seed());
    let mut run = simulate_with_config(name, config, &mut rng)?;
    run.seed = Some(rng.seed());
    Ok(run)
}

/// [`simulate_sampling`] with a validated configuration and caller-owned
/// generator. The configuration seed is ignored.
pub fn simulate_with_config<R: Rng + ?Sized>(
    name: &str,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SamplingRun, SimulationError> {
    config.validate()?;
    let info = distribution_info(name)?;
    let (n, m) = (config.sample_size(), config.num_samples());
    info!(distribution = info.name, sample_size = n, num_samples = m, "sampling run started");

    let sample_means = collect_means(&info.distribution, n, m, rng);

    let statistics = SamplingStatistics {
        sample_mean_mean: stats::mean(&sample_means),
        sample_mean_var: stats::sample_variance(&sample_means),
        sample_mean_std: stats::sample_std(&sample_means),
        theoretical_mean: info.theoretical_mean,
        theoretical_std_of_means: info
            .theoretical_std
            .and_then(|std| defined(std / (n as f64).sqrt())),
        sample_size: n,
        num_samples: m,
    };
    info!(
        distribution = info.name,
        mean = ?statistics.sample_mean_mean,
        std = ?statistics.sample_mean_std,
        "sampling run finished"
    );

    Ok(SamplingRun {
        distribution: info.name,
        sample_means,
        statistics,
        seed: None,
    })
}

/// Means of `num_samples` batches of `sample_size` draws.
///
/// A single batch buffer is reused across samples.
fn collect_means<D, R>(distribution: &D, sample_size: usize, num_samples: usize, rng: &mut R) -> Vec<f64>
where
    D: ParametricDistribution,
    R: Rng + ?Sized,
{
    let mut batch = vec![0.0; sample_size];
    let mut means = Vec::with_capacity(num_samples);

    for _ in 0..num_samples {
        for slot in batch.iter_mut() {
            *slot = distribution.sample(rng);
        }
        means.push(batch.iter().sum::<f64>() / sample_size as f64);
    }

    debug!(family = distribution.family(), count = means.len(), "collected sample means");
    means
}
