//! Discrete counting families.
//!
//! Mass functions are evaluated at non-negative integers only; any other
//! point has mass 0. The CDF is a right-continuous step function.

use distlab_core::traits::{defined, ParametricDistribution};
use distlab_core::types::{DistributionError, DistributionKind};
use rand::Rng;
use rand_distr::{
    Binomial as BinomialSampler, Distribution, Gamma as GammaSampler,
    Geometric as GeometricSampler, Poisson as PoissonSampler,
};
use statrs::distribution::{
    Binomial as BinomialMass, Discrete, DiscreteCDF, Geometric as GeometricMass,
    NegativeBinomial as NegativeBinomialMass, Poisson as PoissonMass,
};

/// `x` as a count when it is a finite non-negative integer.
fn as_count(x: f64) -> Option<u64> {
    (x.is_finite() && x >= 0.0 && x.fract() == 0.0).then_some(x as u64)
}

/// Step CDF for a mass function supported on `{lower, lower + 1, ...}`.
fn step_cdf(x: f64, lower: f64, cdf: impl Fn(u64) -> f64) -> f64 {
    if x.is_nan() || x < lower {
        0.0
    } else if x == f64::INFINITY {
        1.0
    } else {
        cdf(x.floor() as u64)
    }
}

/// Binomial distribution: successes in `n` Bernoulli(`p`) trials.
///
/// # Example
///
/// ```
/// use distlab_core::traits::ParametricDistribution;
/// use distlab_models::families::Binomial;
///
/// let b = Binomial::new(10.0, 0.5).unwrap();
/// assert_eq!(b.mean(), Some(5.0));
/// assert_eq!(b.variance(), Some(2.5));
/// ```
#[derive(Debug, Clone)]
pub struct Binomial {
    trials: u64,
    p: f64,
    mass: BinomialMass,
    sampler: BinomialSampler,
}

impl Binomial {
    /// Family name.
    pub const FAMILY: &'static str = "Binomial";

    /// Create a binomial distribution.
    ///
    /// `n` is rounded to the nearest integer.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` for negative or non-finite `n`,
    /// or `p` outside `[0, 1]`.
    pub fn new(n: f64, p: f64) -> Result<Self, DistributionError> {
        let rounded = n.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return Err(DistributionError::invalid(
                Self::FAMILY,
                format!("number of trials must be a non-negative integer, got {}", n),
            ));
        }
        let trials = rounded as u64;
        let mass =
            BinomialMass::new(p, trials).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler = BinomialSampler::new(trials, p)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            trials,
            p,
            mass,
            sampler,
        })
    }

    /// Number of trials after rounding.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    fn npq(&self) -> f64 {
        self.trials as f64 * self.p * (1.0 - self.p)
    }
}

impl ParametricDistribution for Binomial {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Discrete
    }

    fn mean(&self) -> Option<f64> {
        defined(self.trials as f64 * self.p)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.npq())
    }

    fn skewness(&self) -> Option<f64> {
        defined((1.0 - 2.0 * self.p) / self.npq().sqrt())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        defined((1.0 - 6.0 * self.p * (1.0 - self.p)) / self.npq())
    }

    fn support(&self) -> (f64, f64) {
        (0.0, self.trials as f64)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x >= self.trials as f64 {
            return 1.0;
        }
        step_cdf(x, 0.0, |k| self.mass.cdf(k))
    }

    fn density(&self, x: f64) -> f64 {
        match as_count(x) {
            Some(k) if k <= self.trials => self.mass.pmf(k),
            _ => 0.0,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng) as f64
    }
}

/// Poisson distribution with rate `mu`.
#[derive(Debug, Clone)]
pub struct Poisson {
    mu: f64,
    mass: PoissonMass,
    sampler: PoissonSampler<f64>,
}

impl Poisson {
    /// Family name.
    pub const FAMILY: &'static str = "Poisson";

    /// Create a Poisson distribution.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `mu > 0`.
    pub fn new(mu: f64) -> Result<Self, DistributionError> {
        let mass = PoissonMass::new(mu).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            PoissonSampler::new(mu).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self { mu, mass, sampler })
    }

    /// Rate parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }
}

impl ParametricDistribution for Poisson {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Discrete
    }

    fn mean(&self) -> Option<f64> {
        defined(self.mu)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.mu)
    }

    fn skewness(&self) -> Option<f64> {
        defined(1.0 / self.mu.sqrt())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        defined(1.0 / self.mu)
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn cdf(&self, x: f64) -> f64 {
        step_cdf(x, 0.0, |k| self.mass.cdf(k))
    }

    fn density(&self, x: f64) -> f64 {
        as_count(x).map_or(0.0, |k| self.mass.pmf(k))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

/// Geometric distribution: number of trials up to and including the first
/// success, supported on `{1, 2, 3, ...}`.
#[derive(Debug, Clone)]
pub struct Geometric {
    p: f64,
    mass: GeometricMass,
    sampler: GeometricSampler,
}

impl Geometric {
    /// Family name.
    pub const FAMILY: &'static str = "Geometric";

    /// Create a geometric distribution.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        let mass = GeometricMass::new(p).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            GeometricSampler::new(p).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self { p, mass, sampler })
    }
}

impl ParametricDistribution for Geometric {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Discrete
    }

    fn mean(&self) -> Option<f64> {
        defined(1.0 / self.p)
    }

    fn variance(&self) -> Option<f64> {
        defined((1.0 - self.p) / (self.p * self.p))
    }

    fn skewness(&self) -> Option<f64> {
        defined((2.0 - self.p) / (1.0 - self.p).sqrt())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        defined(6.0 + self.p * self.p / (1.0 - self.p))
    }

    fn support(&self) -> (f64, f64) {
        (1.0, f64::INFINITY)
    }

    fn cdf(&self, x: f64) -> f64 {
        step_cdf(x, 1.0, |k| self.mass.cdf(k))
    }

    fn density(&self, x: f64) -> f64 {
        match as_count(x) {
            Some(k) if k >= 1 => self.mass.pmf(k),
            _ => 0.0,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // rand_distr counts failures before the first success.
        (self.sampler.sample(rng) + 1) as f64
    }
}

/// Negative binomial distribution: failures before the `r`-th success.
#[derive(Debug, Clone)]
pub struct NegativeBinomial {
    r: f64,
    p: f64,
    mass: NegativeBinomialMass,
    mixing: GammaSampler<f64>,
}

impl NegativeBinomial {
    /// Family name.
    pub const FAMILY: &'static str = "Negative Binomial";

    /// Create a negative binomial distribution with `r` successes and success
    /// probability `p`.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `r > 0` and `0 < p < 1`.
    pub fn new(r: f64, p: f64) -> Result<Self, DistributionError> {
        if !(p > 0.0 && p < 1.0) {
            return Err(DistributionError::invalid(
                Self::FAMILY,
                format!("success probability must lie in (0, 1), got {}", p),
            ));
        }
        let mass = NegativeBinomialMass::new(r, p)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let mixing = GammaSampler::new(r, (1.0 - p) / p)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self { r, p, mass, mixing })
    }
}

impl ParametricDistribution for NegativeBinomial {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Discrete
    }

    fn mean(&self) -> Option<f64> {
        defined(self.r * (1.0 - self.p) / self.p)
    }

    fn variance(&self) -> Option<f64> {
        defined(self.r * (1.0 - self.p) / (self.p * self.p))
    }

    fn skewness(&self) -> Option<f64> {
        defined((2.0 - self.p) / (self.r * (1.0 - self.p)).sqrt())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        defined(6.0 / self.r + self.p * self.p / (self.r * (1.0 - self.p)))
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn cdf(&self, x: f64) -> f64 {
        step_cdf(x, 0.0, |k| self.mass.cdf(k))
    }

    fn density(&self, x: f64) -> f64 {
        as_count(x).map_or(0.0, |k| self.mass.pmf(k))
    }

    /// Gamma–Poisson mixture: `λ ~ Gamma(r, (1 − p) / p)`, `X ~ Poisson(λ)`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let lambda = self.mixing.sample(rng);
        PoissonSampler::new(lambda)
            .map(|poisson| poisson.sample(rng))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_binomial_exact_moments() {
        let b = Binomial::new(10.0, 0.5).unwrap();
        assert_eq!(b.mean(), Some(5.0));
        assert_eq!(b.variance(), Some(2.5));
        assert_eq!(b.skewness(), Some(0.0));
        assert_relative_eq!(b.excess_kurtosis().unwrap(), -0.2);
    }

    #[test]
    fn test_binomial_rounds_trials() {
        assert_eq!(Binomial::new(9.6, 0.3).unwrap().trials(), 10);
        assert_eq!(Binomial::new(9.4, 0.3).unwrap().trials(), 9);
        assert!(Binomial::new(-2.0, 0.3).is_err());
        assert!(Binomial::new(10.0, 1.5).is_err());
    }

    #[test]
    fn test_binomial_mass_and_cdf() {
        let b = Binomial::new(4.0, 0.5).unwrap();
        assert_relative_eq!(b.density(2.0), 6.0 / 16.0, epsilon = 1e-12);
        assert_eq!(b.density(2.5), 0.0);
        assert_eq!(b.density(5.0), 0.0);
        assert_eq!(b.density(-1.0), 0.0);
        assert_relative_eq!(b.cdf(1.7), 5.0 / 16.0, epsilon = 1e-12);
        assert_eq!(b.cdf(4.0), 1.0);
        assert_eq!(b.cdf(-0.5), 0.0);
    }

    #[test]
    fn test_binomial_quantile() {
        let b = Binomial::new(10.0, 0.3).unwrap();
        assert_eq!(b.quantile(0.5).unwrap(), 3.0);
        assert_eq!(b.quantile(1.0).unwrap(), 10.0);
    }

    #[test]
    fn test_poisson() {
        let p = Poisson::new(3.0).unwrap();
        assert_eq!(p.mean(), Some(3.0));
        assert_eq!(p.variance(), Some(3.0));
        assert_relative_eq!(p.skewness().unwrap(), 1.0 / 3.0_f64.sqrt());
        assert_relative_eq!(p.density(0.0), (-3.0_f64).exp(), epsilon = 1e-14);
        assert_eq!(p.quantile(0.5).unwrap(), 3.0);
        assert_eq!(p.cdf(f64::INFINITY), 1.0);
        assert!(Poisson::new(0.0).is_err());
    }

    #[test]
    fn test_geometric_counts_trials() {
        let g = Geometric::new(0.3).unwrap();
        assert_relative_eq!(g.mean().unwrap(), 1.0 / 0.3);
        assert_relative_eq!(g.variance().unwrap(), 0.7 / 0.09, epsilon = 1e-12);
        assert_eq!(g.density(0.0), 0.0);
        assert_relative_eq!(g.density(1.0), 0.3, epsilon = 1e-12);
        assert_relative_eq!(g.density(2.0), 0.21, epsilon = 1e-12);
        assert_eq!(g.quantile(0.001).unwrap(), 1.0);
        assert_eq!(g.cdf(0.5), 0.0);

        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..500).all(|_| g.sample(&mut rng) >= 1.0));
    }

    #[test]
    fn test_negative_binomial_counts_failures() {
        let nb = NegativeBinomial::new(5.0, 0.3).unwrap();
        assert_relative_eq!(nb.mean().unwrap(), 5.0 * 0.7 / 0.3, epsilon = 1e-12);
        assert_relative_eq!(nb.variance().unwrap(), 5.0 * 0.7 / 0.09, epsilon = 1e-12);
        assert_relative_eq!(nb.density(0.0), 0.3_f64.powi(5), epsilon = 1e-14);

        let total: f64 = (0..400).map(|k| nb.density(k as f64)).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
        assert!(NegativeBinomial::new(5.0, 1.0).is_err());
    }

    #[test]
    fn test_negative_binomial_sampling_mean() {
        let nb = NegativeBinomial::new(5.0, 0.3).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let draws = nb.sample_n(&mut rng, 20_000);
        assert!(draws.iter().all(|&x| x >= 0.0 && x.fract() == 0.0));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        // Standard error ≈ sqrt(38.9 / 20000) ≈ 0.044
        assert_abs_diff_eq!(mean, 5.0 * 0.7 / 0.3, epsilon = 0.25);
    }
}
