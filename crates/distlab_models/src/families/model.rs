//! Family identifiers and the static-dispatch distribution enum.
//!
//! This module provides:
//! - [`Family`]: Identifier of one of the twelve supported families
//! - [`DistributionModel`]: Enum wrapping the concrete family adapters

use distlab_core::traits::ParametricDistribution;
use distlab_core::types::params::require;
use distlab_core::types::{DistributionError, DistributionKind, ParamValues, SolverError};
use rand::Rng;

use super::{
    Beta, Binomial, ChiSquared, Exponential, FisherF, Gamma, Geometric, NegativeBinomial, Normal,
    Poisson, StudentT, Uniform,
};

/// Supported distribution families.
///
/// Parameter names follow the conventional `loc`/`scale` and shape keys:
///
/// | Family | Keys |
/// |--------|------|
/// | Normal, Uniform | `loc`, `scale` |
/// | Exponential | `scale` |
/// | Gamma | `a`, `scale` |
/// | Beta | `a`, `b` |
/// | ChiSquared, StudentT | `df` |
/// | FisherF | `dfn`, `dfd` |
/// | Binomial, NegativeBinomial | `n`, `p` |
/// | Poisson | `mu` |
/// | Geometric | `p` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Normal distribution
    Normal,
    /// Continuous uniform distribution
    Uniform,
    /// Exponential distribution
    Exponential,
    /// Gamma distribution
    Gamma,
    /// Beta distribution
    Beta,
    /// Chi-squared distribution
    ChiSquared,
    /// Student-t distribution
    StudentT,
    /// F distribution
    FisherF,
    /// Binomial distribution
    Binomial,
    /// Poisson distribution
    Poisson,
    /// Geometric distribution (trials to first success)
    Geometric,
    /// Negative binomial distribution (failures before r-th success)
    NegativeBinomial,
}

impl Family {
    /// Whether the family is continuous or discrete.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Family::Normal
            | Family::Uniform
            | Family::Exponential
            | Family::Gamma
            | Family::Beta
            | Family::ChiSquared
            | Family::StudentT
            | Family::FisherF => DistributionKind::Continuous,
            Family::Binomial | Family::Poisson | Family::Geometric | Family::NegativeBinomial => {
                DistributionKind::Discrete
            }
        }
    }
}

/// Static dispatch enum over the family adapters.
///
/// # Example
///
/// ```
/// use distlab_core::traits::ParametricDistribution;
/// use distlab_models::families::{DistributionModel, Family};
/// use std::collections::BTreeMap;
///
/// let mut params = BTreeMap::new();
/// params.insert("mu".to_string(), 4.0);
///
/// let model = DistributionModel::build(Family::Poisson, &params).unwrap();
/// assert_eq!(model.family(), "Poisson");
/// assert_eq!(model.variance(), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub enum DistributionModel {
    /// Normal distribution
    Normal(Normal),
    /// Continuous uniform distribution
    Uniform(Uniform),
    /// Exponential distribution
    Exponential(Exponential),
    /// Gamma distribution
    Gamma(Gamma),
    /// Beta distribution
    Beta(Beta),
    /// Chi-squared distribution
    ChiSquared(ChiSquared),
    /// Student-t distribution
    StudentT(StudentT),
    /// F distribution
    FisherF(FisherF),
    /// Binomial distribution
    Binomial(Binomial),
    /// Poisson distribution
    Poisson(Poisson),
    /// Geometric distribution
    Geometric(Geometric),
    /// Negative binomial distribution
    NegativeBinomial(NegativeBinomial),
}

impl DistributionModel {
    /// Construct `family` from named parameter values.
    ///
    /// Values are used as given; range validation belongs to the caller's
    /// parameter schema.
    ///
    /// # Errors
    ///
    /// - `DistributionError::MissingParameter` if a required key is absent
    /// - `DistributionError::InvalidParameters` if the backend rejects a value
    pub fn build(family: Family, params: &ParamValues) -> Result<Self, DistributionError> {
        let get = |name: &'static str| require(params, name);
        Ok(match family {
            Family::Normal => DistributionModel::Normal(Normal::new(get("loc")?, get("scale")?)?),
            Family::Uniform => {
                DistributionModel::Uniform(Uniform::new(get("loc")?, get("scale")?)?)
            }
            Family::Exponential => DistributionModel::Exponential(Exponential::new(get("scale")?)?),
            Family::Gamma => DistributionModel::Gamma(Gamma::new(get("a")?, get("scale")?)?),
            Family::Beta => DistributionModel::Beta(Beta::new(get("a")?, get("b")?)?),
            Family::ChiSquared => DistributionModel::ChiSquared(ChiSquared::new(get("df")?)?),
            Family::StudentT => DistributionModel::StudentT(StudentT::new(get("df")?)?),
            Family::FisherF => DistributionModel::FisherF(FisherF::new(get("dfn")?, get("dfd")?)?),
            Family::Binomial => DistributionModel::Binomial(Binomial::new(get("n")?, get("p")?)?),
            Family::Poisson => DistributionModel::Poisson(Poisson::new(get("mu")?)?),
            Family::Geometric => DistributionModel::Geometric(Geometric::new(get("p")?)?),
            Family::NegativeBinomial => {
                DistributionModel::NegativeBinomial(NegativeBinomial::new(get("n")?, get("p")?)?)
            }
        })
    }
}

/// Delegate a trait method to the wrapped adapter.
macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            DistributionModel::Normal($inner) => $body,
            DistributionModel::Uniform($inner) => $body,
            DistributionModel::Exponential($inner) => $body,
            DistributionModel::Gamma($inner) => $body,
            DistributionModel::Beta($inner) => $body,
            DistributionModel::ChiSquared($inner) => $body,
            DistributionModel::StudentT($inner) => $body,
            DistributionModel::FisherF($inner) => $body,
            DistributionModel::Binomial($inner) => $body,
            DistributionModel::Poisson($inner) => $body,
            DistributionModel::Geometric($inner) => $body,
            DistributionModel::NegativeBinomial($inner) => $body,
        }
    };
}

impl ParametricDistribution for DistributionModel {
    fn family(&self) -> &'static str {
        dispatch!(self, d => d.family())
    }

    fn kind(&self) -> DistributionKind {
        dispatch!(self, d => d.kind())
    }

    fn mean(&self) -> Option<f64> {
        dispatch!(self, d => d.mean())
    }

    fn variance(&self) -> Option<f64> {
        dispatch!(self, d => d.variance())
    }

    fn std_dev(&self) -> Option<f64> {
        dispatch!(self, d => d.std_dev())
    }

    fn skewness(&self) -> Option<f64> {
        dispatch!(self, d => d.skewness())
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        dispatch!(self, d => d.excess_kurtosis())
    }

    fn support(&self) -> (f64, f64) {
        dispatch!(self, d => d.support())
    }

    fn cdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.cdf(x))
    }

    fn density(&self, x: f64) -> f64 {
        dispatch!(self, d => d.density(x))
    }

    fn quantile(&self, p: f64) -> Result<f64, SolverError> {
        dispatch!(self, d => d.quantile(p))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        dispatch!(self, d => d.sample(rng))
    }
}
