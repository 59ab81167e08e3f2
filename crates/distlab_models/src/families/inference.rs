//! Sampling distributions of classical inference: χ², Student-t and F.
//!
//! Higher moments of Student-t and F exist only above degree-of-freedom
//! thresholds; below them the moment is reported as `None`.

use distlab_core::traits::{defined, ParametricDistribution};
use distlab_core::types::{DistributionError, DistributionKind, SolverError};
use rand::Rng;
use rand_distr::{
    ChiSquared as ChiSquaredSampler, Distribution, FisherF as FisherSampler,
    StudentT as StudentSampler,
};
use statrs::distribution::{
    ChiSquared as ChiSquaredDensity, Continuous, ContinuousCDF, FisherSnedecor,
    StudentsT as StudentDensity,
};

/// Chi-squared distribution with `df` degrees of freedom.
#[derive(Debug, Clone)]
pub struct ChiSquared {
    df: f64,
    density: ChiSquaredDensity,
    sampler: ChiSquaredSampler<f64>,
}

impl ChiSquared {
    /// Family name.
    pub const FAMILY: &'static str = "Chi-squared";

    /// Create a chi-squared distribution.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `df > 0`.
    pub fn new(df: f64) -> Result<Self, DistributionError> {
        let density =
            ChiSquaredDensity::new(df).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            ChiSquaredSampler::new(df).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            df,
            density,
            sampler,
        })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.df
    }
}

impl ParametricDistribution for ChiSquared {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        defined(self.df)
    }

    fn variance(&self) -> Option<f64> {
        defined(2.0 * self.df)
    }

    fn skewness(&self) -> Option<f64> {
        defined((8.0 / self.df).sqrt())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        defined(12.0 / self.df)
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

/// Standard Student-t distribution with `df` degrees of freedom.
///
/// # Example
///
/// ```
/// use distlab_core::traits::ParametricDistribution;
/// use distlab_models::families::StudentT;
///
/// // Cauchy: no finite moments
/// let cauchy = StudentT::new(1.0).unwrap();
/// assert_eq!(cauchy.mean(), None);
/// assert_eq!(cauchy.variance(), None);
/// ```
#[derive(Debug, Clone)]
pub struct StudentT {
    df: f64,
    density: StudentDensity,
    sampler: StudentSampler<f64>,
}

impl StudentT {
    /// Family name.
    pub const FAMILY: &'static str = "Student-t";

    /// Create a Student-t distribution centred at 0 with unit scale.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless `df > 0`.
    pub fn new(df: f64) -> Result<Self, DistributionError> {
        let density = StudentDensity::new(0.0, 1.0, df)
            .map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            StudentSampler::new(df).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            df,
            density,
            sampler,
        })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.df
    }
}

impl ParametricDistribution for StudentT {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        (self.df > 1.0).then_some(0.0)
    }

    fn variance(&self) -> Option<f64> {
        if self.df > 2.0 {
            defined(self.df / (self.df - 2.0))
        } else {
            None
        }
    }

    fn skewness(&self) -> Option<f64> {
        (self.df > 3.0).then_some(0.0)
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        if self.df > 4.0 {
            defined(6.0 / (self.df - 4.0))
        } else {
            None
        }
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

    /// Closed form through the inverse regularised incomplete beta.
    fn quantile(&self, p: f64) -> Result<f64, SolverError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SolverError::NumericalInstability(format!(
                "probability {} outside [0, 1]",
                p
            )));
        }
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.density.inverse_cdf(p))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

/// Fisher–Snedecor F distribution with `dfn` numerator and `dfd`
/// denominator degrees of freedom.
#[derive(Debug, Clone)]
pub struct FisherF {
    dfn: f64,
    dfd: f64,
    density: FisherSnedecor,
    sampler: FisherSampler<f64>,
}

impl FisherF {
    /// Family name.
    pub const FAMILY: &'static str = "F";

    /// Create an F distribution.
    ///
    /// # Errors
    ///
    /// `DistributionError::InvalidParameters` unless both degrees of freedom
    /// are positive.
    pub fn new(dfn: f64, dfd: f64) -> Result<Self, DistributionError> {
        let density =
            FisherSnedecor::new(dfn, dfd).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        let sampler =
            FisherSampler::new(dfn, dfd).map_err(|e| DistributionError::invalid(Self::FAMILY, e))?;
        Ok(Self {
            dfn,
            dfd,
            density,
            sampler,
        })
    }
}

impl ParametricDistribution for FisherF {
    fn family(&self) -> &'static str {
        Self::FAMILY
    }

    fn kind(&self) -> DistributionKind {
        DistributionKind::Continuous
    }

    fn mean(&self) -> Option<f64> {
        let d2 = self.dfd;
        if d2 > 2.0 {
            defined(d2 / (d2 - 2.0))
        } else {
            None
        }
    }

    fn variance(&self) -> Option<f64> {
        let (d1, d2) = (self.dfn, self.dfd);
        if d2 > 4.0 {
            defined(2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0).powi(2) * (d2 - 4.0)))
        } else {
            None
        }
    }

    fn skewness(&self) -> Option<f64> {
        let (d1, d2) = (self.dfn, self.dfd);
        if d2 > 6.0 {
            defined(
                (2.0 * d1 + d2 - 2.0) * (8.0 * (d2 - 4.0)).sqrt()
                    / ((d2 - 6.0) * (d1 * (d1 + d2 - 2.0)).sqrt()),
            )
        } else {
            None
        }
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        let (d1, d2) = (self.dfn, self.dfd);
        if d2 > 8.0 {
            let numerator =
                12.0 * (d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0) + (d2 - 4.0) * (d2 - 2.0).powi(2));
            let denominator = d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0);
            defined(numerator / denominator)
        } else {
            None
        }
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
