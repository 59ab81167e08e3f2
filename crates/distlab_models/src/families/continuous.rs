//! Continuous location/scale and shape families.
//!
//! - [`Normal`]: `N(loc, scale²)`
//! - [`Uniform`]: `U[loc, loc + scale]`
//! - [`Exponential`]: rate `1 / scale`
//! - [`Gamma`]: shape `a`, scale `θ`
//! - [`Beta`]: shapes `a`, `b` on `[0, 1]`
//!
//! Densities and CDFs come from `statrs`, variates from `rand_distr`;
//! moments are closed form.

use distlab_core::traits::{defined, ParametricDistribution};
use distlab_core::types::{DistributionError, DistributionKind, SolverError};
use rand::Rng;
use rand_distr::{
    Beta as BetaSampler, Distribution, Exp as ExpSampler, Gamma as GammaSampler,
    Normal as NormalSampler,
};
use statrs::distribution::{
    Beta as BetaDensity, Continuous, ContinuousCDF, Exp as ExpDensity, Gamma as GammaDensity,
    Normal as NormalDensity, Uniform as UniformDensity,
};
use statrs::function::erf::erf_inv;

fn check_probability(p: f64) -> Result<(), SolverError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SolverError::NumericalInstability(format!(
            "probability {} outside [0, 1]",
            p
        )))
    }
}

/// Normal distribution `N(loc, scale²)`.
///
/// # Example
///
/// ```
/// use distlab_core::traits::ParametricDistribution;
/// use distlab_models::families::Normal;
///
/// let normal = Normal::new(0.0, 1.0).unwrap();
/// assert_eq!(normal.mean(), Some(0.0));
/// assert!((normal.quantile(0.975).unwrap() - 1.959964).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Normal {
    loc: f64,
    scale: f64,
    density: NormalDensity,
    sampler: NormalSampler<f64>,
}

impl Normal {
    /// Family name.
    pub const FAMILY: &'static str = "Normal";

    /// Create a normal distribution with mean `loc` and standard deviation
    /// `scale`.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `scale > 0` and both
    /// values are finite.
    pub fn new(loc: f64, scale: f64) -> Result<Self, DistributionError> {
        let density =
            NormalDensity::new(loc, scale).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            NormalSampler::new(loc, scale).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            loc,
            scale,
            density,
            sampler,
        })
    }

    /// Mean parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Standard deviation parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ParametricDistribution for Normal {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        defined(self.loc)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.scale * self.scale)
    }

    fn std_dev(&self) -> Option<f64> {
        defined(self.scale)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        Some(0.0)
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.density.cdf(x)
    }

    fn density(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    fn quantile(&self, p: f64) -> Result<f64, SolverError> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.loc + self.scale * std::f64::consts::SQRT_2 * erf_inv(2.0 * p - 1.0))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

/// Continuous uniform distribution on `[loc, loc + scale]`.
#[derive(Debug, Clone)]
pub struct Uniform {
    loc: f64,
    scale: f64,
    density: UniformDensity,
}

impl Uniform {
    /// Family name.
    pub const FAMILY: &'static str = "Uniform";

    /// Create a uniform distribution with lower bound `loc` and width `scale`.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `scale > 0` and both
    /// bounds are finite.
    pub fn new(loc: f64, scale: f64) -> Result<Self, DistributionError> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(DistributionError::invalid(
                Self::FAMILY,
                format!("width must be positive and finite, got {}", scale),
            ));
        }
        let density = UniformDensity::new(loc, loc + scale)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            loc,
            scale,
            density,
        })
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.loc
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.loc + self.scale
    }
}

impl ParametricDistribution for Uniform {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        defined(self.loc + self.scale / 2.0)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.scale * self.scale / 12.0)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        Some(-6.0 / 5.0)
    }

    fn support(&self) -> (f64, f64) {
        (self.lower(), self.upper())
    }

    fn cdf(&self, x: f64) -> f64 {
        self.density.cdf(x)
    }

    fn density(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    fn quantile(&self, p: f64) -> Result<f64, SolverError> {
        check_probability(p)?;
        Ok(self.loc + p * self.scale)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.loc + self.scale * rng.gen::<f64>()
    }
}

/// Exponential distribution with mean `scale` (rate `1 / scale`).
#[derive(Debug, Clone)]
pub struct Exponential {
    scale: f64,
    density: ExpDensity,
    sampler: ExpSampler<f64>,
}

impl Exponential {
    /// Family name.
    pub const FAMILY: &'static str = "Exponential";

    /// Create an exponential distribution with the given scale.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `scale > 0`.
    pub fn new(scale: f64) -> Result<Self, DistributionError> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(DistributionError::invalid(
                Self::FAMILY,
                format!("scale must be positive and finite, got {}", scale),
            ));
        }
        let rate = 1.0 / scale;
        let density =
            ExpDensity::new(rate).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            ExpSampler::new(rate).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            scale,
            density,
            sampler,
        })
    }

    /// Scale parameter (the mean).
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ParametricDistribution for Exponential {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        defined(self.scale)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.scale * self.scale)
    }

    fn skewness(&self) -> Option<f64> {
        Some(2.0)
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        Some(6.0)
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.density.cdf(x)
    }

    fn density(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    fn quantile(&self, p: f64) -> Result<f64, SolverError> {
        check_probability(p)?;
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(-self.scale * (-p).ln_1p())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

/// Gamma distribution with shape `a` and scale `θ`.
#[derive(Debug, Clone)]
pub struct Gamma {
    shape: f64,
    scale: f64,
    density: GammaDensity,
    sampler: GammaSampler<f64>,
}

impl Gamma {
    /// Family name.
    pub const FAMILY: &'static str = "Gamma";

    /// Create a gamma distribution.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless both values are positive
    /// and finite.
    pub fn new(shape: f64, scale: f64) -> Result<Self, DistributionError> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(DistributionError::invalid(
                Self::FAMILY,
                format!("scale must be positive and finite, got {}", scale),
            ));
        }
        let density = GammaDensity::new(shape, 1.0 / scale)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler = GammaSampler::new(shape, scale)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            shape,
            scale,
            density,
            sampler,
        })
    }

    /// Shape parameter `a`.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter `θ`.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ParametricDistribution for Gamma {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        defined(self.shape * self.scale)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.shape * self.scale * self.scale)
    }

    fn skewness(&self) -> Option<f64> {
        defined(2.0 / self.shape.sqrt())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        defined(6.0 / self.shape)
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.density.cdf(x)
    }

    fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.density.pdf(x)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

/// Beta distribution with shapes `a` and `b` on `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Beta {
    a: f64,
    b: f64,
    density: BetaDensity,
    sampler: BetaSampler<f64>,
}

impl Beta {
    /// Family name.
    pub const FAMILY: &'static str = "Beta";

    /// Create a beta distribution.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless both shapes are positive
    /// and finite.
    pub fn new(a: f64, b: f64) -> Result<Self, DistributionError> {
        let density =
            BetaDensity::new(a, b).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            BetaSampler::new(a, b).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            a,
            b,
            density,
            sampler,
        })
    }
}

impl ParametricDistribution for Beta {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        defined(self.a / (self.a + self.b))
    }

    fn variance(&self) -> Option<f64> {
        let (a, b) = (self.a, self.b);
        let s = a + b;
        defined(a * b / (s * s * (s + 1.0)))
    }

    fn skewness(&self) -> Option<f64> {
        let (a, b) = (self.a, self.b);
        let s = a + b;
        defined(2.0 * (b - a) * (s + 1.0).sqrt() / ((s + 2.0) * (a * b).sqrt()))
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        let (a, b) = (self.a, self.b);
        let s = a + b;
        let numerator = 6.0 * ((a - b).powi(2) * (s + 1.0) - a * b * (s + 2.0));
        defined(numerator / (a * b * (s + 2.0) * (s + 3.0)))
    }

    fn support(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.density.cdf(x)
        }
    }

    fn density(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        self.density.pdf(x)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}
