//! Density and mass curves for plotting.
//!
//! Continuous kinds are sampled on an even grid; discrete kinds at every
//! integer of the display domain. The auto-selected domain spans the 0.1 %
//! to 99.9 % quantiles.

use distlab_core::math::stats::linspace;
use distlab_core::traits::ParametricDistribution;
use distlab_core::types::{DistributionKind, ParamValues};
use serde::Serialize;
use tracing::debug;

use super::catalog::lookup;
use crate::error::ModelError;

/// Grid size for continuous curves.
pub const CONTINUOUS_POINTS: usize = 1000;

/// Maximum number of integer points in an auto-selected discrete domain.
pub const MAX_DISCRETE_POINTS: usize = 100;

/// Maximum number of integer points in a caller-supplied discrete domain.
///
/// Wider ranges are truncated at the upper end.
pub const MAX_EXPLICIT_DISCRETE_POINTS: usize = 10_000;

/// 2^52: consecutive integers stay distinct in `f64` below this magnitude.
const INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Lower and upper tail probabilities of the auto-selected domain.
const TAIL: f64 = 0.001;

const CONTINUOUS_FALLBACK: (f64, f64) = (-5.0, 5.0);
const DISCRETE_FALLBACK: (f64, f64) = (0.0, 20.0);

/// `(x, y)` points of a density or mass function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    /// Evaluation points in increasing order.
    pub x: Vec<f64>,
    /// Density (continuous) or mass (discrete) at each point.
    pub y: Vec<f64>,
}

impl DensityCurve {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Density or mass curve of `name` with clamped parameters.
///
/// `range` overrides the auto-selected domain; a non-finite range is ignored.
///
/// # Errors
///
/// `ModelError::Catalog` for unknown names.
///
/// # Example
///
/// ```
/// use distlab_models::explorer::density_curve;
/// use std::collections::BTreeMap;
///
/// let curve = density_curve("Normal", &BTreeMap::new(), Some((-2.0, 2.0))).unwrap();
/// assert_eq!(curve.len(), 1000);
/// assert!(curve.x.iter().all(|x| (-2.0..=2.0).contains(x)));
/// ```
pub fn density_curve(
    name: &str,
    raw: &ParamValues,
    range: Option<(f64, f64)>,
) -> Result<DensityCurve, ModelError> {
    density_curve_with_points(name, raw, range, CONTINUOUS_POINTS)
}

/// [`density_curve`] with a custom continuous grid size.
///
/// `points` has no effect on discrete kinds.
pub fn density_curve_with_points(
    name: &str,
    raw: &ParamValues,
    range: Option<(f64, f64)>,
    points: usize,
) -> Result<DensityCurve, ModelError> {
    let entry = lookup(name)?;
    let (_, model) = entry.build(raw)?;
    let range = range
        .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
        .map(|(lo, hi)| (lo.min(hi), lo.max(hi)));

    Ok(match entry.kind() {
        DistributionKind::Continuous => continuous_curve(&model, range, points),
        DistributionKind::Discrete => discrete_curve(&model, range),
    })
}

/// Display bounds for a continuous distribution.
///
/// Infinite quantiles fall back to `mean ± 4·std`; any other failure to the
/// fixed `[-5, 5]` window.
pub fn continuous_bounds<D: ParametricDistribution>(model: &D) -> (f64, f64) {
    let (lo, hi) = match (model.quantile(TAIL), model.quantile(1.0 - TAIL)) {
        (Ok(lo), Ok(hi)) => (lo, hi),
        (lo, hi) => {
            debug!(family = model.family(), ?lo, ?hi, "tail quantiles unavailable");
            return CONTINUOUS_FALLBACK;
        }
    };

    let spread = model.mean().zip(model.std_dev());
    let lo = match (lo.is_infinite(), spread) {
        (false, _) => lo,
        (true, Some((mean, std))) => mean - 4.0 * std,
        (true, None) => return CONTINUOUS_FALLBACK,
    };
    let hi = match (hi.is_infinite(), spread) {
        (false, _) => hi,
        (true, Some((mean, std))) => mean + 4.0 * std,
        (true, None) => return CONTINUOUS_FALLBACK,
    };

    if lo.is_finite() && hi.is_finite() && lo < hi {
        (lo, hi)
    } else {
        CONTINUOUS_FALLBACK
    }
}

/// Display bounds for a discrete distribution, at most
/// [`MAX_DISCRETE_POINTS`] integers wide.
pub fn discrete_bounds<D: ParametricDistribution>(model: &D) -> (f64, f64) {
    match (model.quantile(TAIL), model.quantile(1.0 - TAIL)) {
        (Ok(lo), Ok(hi)) if lo.is_finite() && hi.is_finite() => {
            let lo = lo.floor().max(0.0);
            let hi = hi.floor().max(lo).min(lo + (MAX_DISCRETE_POINTS - 1) as f64);
            (lo, hi)
        }
        (lo, hi) => {
            debug!(family = model.family(), ?lo, ?hi, "tail quantiles unavailable");
            DISCRETE_FALLBACK
        }
    }
}

/// Enclosing integers of a caller-supplied range, at most
/// [`MAX_EXPLICIT_DISCRETE_POINTS`] wide.
fn explicit_discrete_bounds(lo: f64, hi: f64) -> (f64, f64) {
    let lo = lo.floor().clamp(-INTEGER_LIMIT, INTEGER_LIMIT);
    let max_hi = lo + (MAX_EXPLICIT_DISCRETE_POINTS - 1) as f64;
    let hi = hi.ceil();
    if hi > max_hi {
        debug!(lo, hi, "explicit discrete range truncated");
    }
    (lo, hi.clamp(lo, max_hi))
}

fn finite_density<D: ParametricDistribution>(model: &D, x: f64) -> f64 {
    let y = model.density(x);
    // Singular end points (e.g. Beta with a < 1 at 0) plot as 0.
    if y.is_finite() && y > 0.0 {
        y
    } else {
        0.0
    }
}

fn continuous_curve<D: ParametricDistribution>(
    model: &D,
    range: Option<(f64, f64)>,
    points: usize,
) -> DensityCurve {
    let (lo, hi) = range.unwrap_or_else(|| continuous_bounds(model));
    let x = linspace(lo, hi, points);
    let y = x.iter().map(|&x| finite_density(model, x)).collect();
    DensityCurve { x, y }
}

fn discrete_curve<D: ParametricDistribution>(model: &D, range: Option<(f64, f64)>) -> DensityCurve {
    let (lo, hi) = match range {
        Some((lo, hi)) => explicit_discrete_bounds(lo, hi),
        None => discrete_bounds(model),
    };
    let count = ((hi - lo) as usize).saturating_add(1);
    let x: Vec<f64> = (0..count).map(|i| lo + i as f64).collect();
    let y = x.iter().map(|&k| finite_density(model, k)).collect();
    DensityCurve { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{Beta, Binomial, Geometric, Normal, Poisson, StudentT};
    use approx::assert_abs_diff_eq;

    fn params(pairs: &[(&str, f64)]) -> ParamValues {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_normal_auto_bounds() {
        let (lo, hi) = continuous_bounds(&Normal::new(0.0, 1.0).unwrap());
        assert_abs_diff_eq!(lo, -3.090_232_306_167_813_5, epsilon = 1e-8);
        assert_abs_diff_eq!(hi, 3.090_232_306_167_813_5, epsilon = 1e-8);
    }

    #[test]
    fn test_heavy_tail_bounds_are_finite() {
        let (lo, hi) = continuous_bounds(&StudentT::new(1.0).unwrap());
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < -300.0 && hi > 300.0);
    }

    #[test]
    fn test_singular_density_reported_as_zero() {
        let beta = Beta::new(0.5, 0.5).unwrap();
        let curve = continuous_curve(&beta, Some((0.0, 1.0)), 11);
        assert_eq!(curve.y[0], 0.0);
        assert_eq!(curve.y[10], 0.0);
        assert!(curve.y[5] > 0.0);
    }

    #[test]
    fn test_discrete_bounds() {
        assert_eq!(discrete_bounds(&Poisson::new(3.0).unwrap()), (0.0, 10.0));
        assert_eq!(discrete_bounds(&Geometric::new(0.3).unwrap()).0, 1.0);

        let (lo, hi) = discrete_bounds(&Geometric::new(0.01).unwrap());
        assert_eq!(hi - lo + 1.0, MAX_DISCRETE_POINTS as f64);
    }

    #[test]
    fn test_discrete_explicit_range_encloses_integers() {
        let binomial = Binomial::new(10.0, 0.5).unwrap();
        let curve = discrete_curve(&binomial, Some((2.5, 5.2)));
        assert_eq!(curve.x, vec![2.0, 3.0, 4.0, 5.0, 6.0]);

        let curve = discrete_curve(&binomial, Some((8.0, 12.0)));
        assert_eq!(curve.y[3], 0.0);
        assert_eq!(curve.y[4], 0.0);
    }

    #[test]
    fn test_explicit_discrete_bounds_are_capped() {
        assert_eq!(explicit_discrete_bounds(0.5, 3.2), (0.0, 4.0));
        assert_eq!(
            explicit_discrete_bounds(0.0, 1e300),
            (0.0, (MAX_EXPLICIT_DISCRETE_POINTS - 1) as f64)
        );
        assert_eq!(
            explicit_discrete_bounds(-1e300, -1e299),
            (-INTEGER_LIMIT, -INTEGER_LIMIT)
        );
    }

    #[test]
    fn test_curve_lengths() {
        let curve = density_curve("Gamma", &ParamValues::new(), None).unwrap();
        assert_eq!(curve.len(), CONTINUOUS_POINTS);
        assert_eq!(curve.x.len(), curve.y.len());

        let curve = density_curve_with_points("Beta", &ParamValues::new(), None, 50).unwrap();
        assert_eq!(curve.len(), 50);

        let curve = density_curve("Binomial", &params(&[("n", 10.0), ("p", 0.5)]), None).unwrap();
        assert!(!curve.is_empty());
        let total: f64 = curve.y.iter().sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_non_finite_range_is_ignored() {
        let auto = density_curve("Normal", &ParamValues::new(), None).unwrap();
        let curve =
            density_curve("Normal", &ParamValues::new(), Some((f64::NAN, 1.0))).unwrap();
        assert_eq!(auto, curve);
    }

    #[test]
    fn test_reversed_range_is_reordered() {
        let curve = density_curve("Normal", &ParamValues::new(), Some((2.0, -2.0))).unwrap();
        assert_eq!(curve.x[0], -2.0);
        assert!(curve.x.windows(2).all(|w| w[0] < w[1]));

        let curve = density_curve("Poisson", &ParamValues::new(), Some((4.2, 1.5))).unwrap();
        assert_eq!(curve.x, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
