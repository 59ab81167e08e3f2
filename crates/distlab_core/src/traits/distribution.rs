//! The parametric distribution capability.

use rand::Rng;

use crate::math::quantile::{invert_continuous, invert_discrete};
use crate::types::{DistributionKind, SolverError};

/// Keep `value` only when it is finite.
///
/// Divergent or undefined moments are reported as `None` rather than NaN or
/// infinity, so callers never confuse "undefined" with a number.
///
/// # Example
///
/// ```
/// use distlab_core::traits::defined;
///
/// assert_eq!(defined(1.5), Some(1.5));
/// assert_eq!(defined(f64::INFINITY), None);
/// assert_eq!(defined(f64::NAN), None);
/// ```
#[inline]
pub fn defined(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// A fully parameterised probability distribution.
///
/// Implementors provide closed-form moments, the CDF, the density (continuous
/// kinds) or mass (discrete kinds), and a variate generator. Quantiles
/// default to numerical CDF inversion; families with a closed form should
/// override [`ParametricDistribution::quantile`].
///
/// # Static dispatch
///
/// [`ParametricDistribution::sample`] is generic over the RNG, so the trait
/// is not object safe. Collect implementors in an enum and delegate:
///
/// ```
/// use distlab_core::traits::ParametricDistribution;
/// use distlab_core::types::DistributionKind;
/// use rand::Rng;
///
/// struct UnitUniform;
///
/// impl ParametricDistribution for UnitUniform {
///     fn family(&self) -> &'static str { "Uniform" }
///     fn kind(&self) -> DistributionKind { DistributionKind::Continuous }
///     fn mean(&self) -> Option<f64> { Some(0.5) }
///     fn variance(&self) -> Option<f64> { Some(1.0 / 12.0) }
///     fn skewness(&self) -> Option<f64> { Some(0.0) }
///     fn excess_kurtosis(&self) -> Option<f64> { Some(-1.2) }
///     fn support(&self) -> (f64, f64) { (0.0, 1.0) }
///     fn cdf(&self, x: f64) -> f64 { x.clamp(0.0, 1.0) }
///     fn density(&self, x: f64) -> f64 { if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 } }
///     fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 { rng.gen::<f64>() }
/// }
///
/// let q = UnitUniform.quantile(0.25).unwrap();
/// assert!((q - 0.25).abs() < 1e-10);
/// ```
pub trait ParametricDistribution {
    /// Family name, e.g. `"Gamma"`.
    fn family(&self) -> &'static str;

    /// Continuous or discrete.
    fn kind(&self) -> DistributionKind;

    /// Expected value, `None` when it does not exist.
    fn mean(&self) -> Option<f64>;

    /// Variance, `None` when undefined or infinite.
    fn variance(&self) -> Option<f64>;

    /// Standard deviation, the square root of [`Self::variance`].
    fn std_dev(&self) -> Option<f64> {
        self.variance().and_then(|v| defined(v.sqrt()))
    }

    /// Skewness (third standardised moment).
    fn skewness(&self) -> Option<f64>;

    /// Excess kurtosis (fourth standardised moment minus 3).
    fn excess_kurtosis(&self) -> Option<f64>;

    /// `(lower, upper)` bounds of the support; either may be infinite.
    fn support(&self) -> (f64, f64);

    /// Cumulative distribution function `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Probability density (continuous kinds) or mass (discrete kinds) at `x`.
    ///
    /// Discrete implementations return 0 for non-integer `x` and for points
    /// outside the support.
    fn density(&self, x: f64) -> f64;

    /// Inverse CDF.
    ///
    /// Continuous kinds return the `x` solving `F(x) = p`; discrete kinds the
    /// smallest support point `k` with `F(k) >= p`. `p = 0` and `p = 1` map to
    /// the support bounds.
    ///
    /// # Errors
    ///
    /// `SolverError` when `p` lies outside `[0, 1]` or inversion fails.
    fn quantile(&self, p: f64) -> Result<f64, SolverError> {
        let hint = self.mean().unwrap_or(0.0);
        let cdf = |x: f64| self.cdf(x);
        match self.kind() {
            DistributionKind::Continuous => invert_continuous(cdf, p, self.support(), hint),
            DistributionKind::Discrete => invert_discrete(cdf, p, self.support(), hint),
        }
    }

    /// Draw one random variate.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Draw `size` independent variates.
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<f64> {
        (0..size).map(|_| self.sample(rng)).collect()
    }
}
