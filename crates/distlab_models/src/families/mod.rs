//! Distribution family adapters.
//!
//! Each adapter wraps a `statrs` density/CDF and a `rand_distr` sampler
//! behind [`ParametricDistribution`](distlab_core::traits::ParametricDistribution),
//! with moments written in closed form.
//!
//! - `continuous`: Normal, Uniform, Exponential, Gamma, Beta
//! - `inference`: Chi-squared, Student-t, F
//! - `discrete`: Binomial, Poisson, Geometric, Negative Binomial
//! - `model`: [`Family`] identifiers and the [`DistributionModel`] enum

mod continuous;
mod discrete;
mod inference;
mod model;

pub use continuous::{Beta, Exponential, Gamma, Normal, Uniform};
pub use discrete::{Binomial, Geometric, NegativeBinomial, Poisson};
pub use inference::{ChiSquared, FisherF, StudentT};
pub use model::{DistributionModel, Family};
