//! Moments and quantiles of a catalogue distribution.

use distlab_core::traits::{defined, ParametricDistribution};
use distlab_core::types::{DistributionKind, ParamValues};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use super::catalog::lookup;
use crate::error::ModelError;

/// Summary statistics of one parameterised distribution.
///
/// Every statistic is optional: an undefined or divergent value is `None`
/// while the rest of the record stays populated. Quantiles, skewness and
/// kurtosis are computed for continuous kinds only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionQueryResult {
    /// Catalogue name.
    pub name: &'static str,
    /// Continuous or discrete.
    pub kind: DistributionKind,
    /// Parameters after clamping.
    pub params: ParamValues,
    /// Display-only support description.
    pub support: &'static str,
    /// Expected value.
    pub mean: Option<f64>,
    /// Variance.
    pub variance: Option<f64>,
    /// Standard deviation.
    pub std: Option<f64>,
    /// First quartile.
    pub q25: Option<f64>,
    /// Median.
    pub median: Option<f64>,
    /// Third quartile.
    pub q75: Option<f64>,
    /// Skewness.
    pub skewness: Option<f64>,
    /// Excess kurtosis.
    pub kurtosis: Option<f64>,
}

impl DistributionQueryResult {
    /// Interquartile range `q75 - q25`, when both quartiles are defined.
    pub fn iqr(&self) -> Option<f64> {
        match (self.q25, self.q75) {
            (Some(q25), Some(q75)) => defined(q75 - q25),
            _ => None,
        }
    }
}

fn quantile_or_none<D: ParametricDistribution>(model: &D, p: f64) -> Option<f64> {
    match model.quantile(p) {
        Ok(q) => defined(q),
        Err(e) => {
            warn!(family = model.family(), p, error = %e, "quantile unavailable");
            None
        }
    }
}

/// Evaluate moments and quantiles of `name` with clamped parameters.
///
/// # Errors
///
/// `ModelError::Catalog` for unknown names.
///
/// # Example
///
/// ```
/// use distlab_models::explorer::evaluate;
/// use std::collections::BTreeMap;
///
/// let mut raw = BTreeMap::new();
/// raw.insert("n".to_string(), 10.0);
/// raw.insert("p".to_string(), 0.5);
///
/// let result = evaluate("Binomial", &raw).unwrap();
/// assert_eq!(result.mean, Some(5.0));
/// assert_eq!(result.variance, Some(2.5));
/// assert_eq!(result.median, None);
/// ```
pub fn evaluate(name: &str, raw: &ParamValues) -> Result<DistributionQueryResult, ModelError> {
    let entry = lookup(name)?;
    let (params, model) = entry.build(raw)?;
    debug!(name, ?params, "evaluating distribution");

    let (q25, median, q75, skewness, kurtosis) = if entry.kind().is_continuous() {
        (
            quantile_or_none(&model, 0.25),
            quantile_or_none(&model, 0.5),
            quantile_or_none(&model, 0.75),
            model.skewness(),
            model.excess_kurtosis(),
        )
    } else {
        (None, None, None, None, None)
    };

    Ok(DistributionQueryResult {
        name: entry.name,
        kind: entry.kind(),
        support: entry.support,
        mean: model.mean(),
        variance: model.variance(),
        std: model.std_dev(),
        q25,
        median,
        q75,
        skewness,
        kurtosis,
        params,
    })
}

/// Draw `size` random variates from `name` with clamped parameters.
///
/// # Errors
///
/// `ModelError::Catalog` for unknown names.
pub fn sample<R: Rng + ?Sized>(
    name: &str,
    raw: &ParamValues,
    size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, ModelError> {
    let (_, model) = lookup(name)?.build(raw)?;
    Ok(model.sample_n(rng, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(pairs: &[(&str, f64)]) -> ParamValues {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_evaluate_standard_normal() {
        let result = evaluate("Normal", &params(&[("loc", 0.0), ("scale", 1.0)])).unwrap();
        assert_eq!(result.name, "Normal");
        assert_eq!(result.kind, DistributionKind::Continuous);
        assert_abs_diff_eq!(result.mean.unwrap(), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.variance.unwrap(), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.std.unwrap(), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.median.unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.iqr().unwrap(), 1.348_979_500_392_163, epsilon = 1e-9);
        assert_eq!(result.skewness, Some(0.0));
        assert_eq!(result.kurtosis, Some(0.0));
    }

    #[test]
    fn test_evaluate_clamps_before_use() {
        let result = evaluate("Normal", &params(&[("loc", 0.0), ("scale", 0.01)])).unwrap();
        assert_eq!(result.params["scale"], 0.1);
        assert_eq!(result.std, Some(0.1));

        let result = evaluate("Normal", &params(&[("scale", 50.0)])).unwrap();
        assert_eq!(result.std, Some(5.0));
    }

    #[test]
    fn test_evaluate_discrete_omits_continuous_fields() {
        let result = evaluate("Poisson", &params(&[("mu", 3.0)])).unwrap();
        assert_eq!(result.kind, DistributionKind::Discrete);
        assert_eq!(result.mean, Some(3.0));
        assert_eq!(result.q25, None);
        assert_eq!(result.median, None);
        assert_eq!(result.skewness, None);
        assert_eq!(result.iqr(), None);
    }

    #[test]
    fn test_evaluate_partial_moments() {
        // Cauchy: quantiles exist, moments do not.
        let result = evaluate("Student-t", &params(&[("df", 1.0)])).unwrap();
        assert_eq!(result.mean, None);
        assert_eq!(result.variance, None);
        assert_eq!(result.std, None);
        assert_eq!(result.skewness, None);
        assert_eq!(result.kurtosis, None);
        assert_abs_diff_eq!(result.q75.unwrap(), 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(result.iqr().unwrap(), 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_evaluate_unknown_name() {
        let err = evaluate("Cauchy", &ParamValues::new()).unwrap_err();
        assert!(err.is_unknown_distribution());
    }

    #[test]
    fn test_sample_uses_clamped_parameters() {
        let mut rng = StdRng::seed_from_u64(5);
        let draws = sample("Beta", &params(&[("a", -3.0)]), 200, &mut rng).unwrap();
        assert_eq!(draws.len(), 200);
        assert!(draws.iter().all(|x| (0.0..=1.0).contains(x)));

        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample("Cauchy", &ParamValues::new(), 10, &mut rng).is_err());
    }
}
