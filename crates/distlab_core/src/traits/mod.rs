//! Capability traits shared by the distribution engines.
//!
//! This module defines:
//! - `ParametricDistribution`: moments, CDF, density/mass, quantile and
//!   random variates of a fully parameterised distribution
//!
//! The trait is generic over the random source and therefore meant for
//! static dispatch: families are collected in an enum (see
//! `distlab_models::DistributionModel`) rather than behind `Box<dyn Trait>`.

pub mod distribution;

pub use distribution::{defined, ParametricDistribution};
