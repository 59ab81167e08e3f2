//! Error types for the sampling engine.
//!
//! `ConfigError` covers validation of run sizes; `SimulationError` is what
//! every registry and simulation operation returns.

use distlab_core::types::{CatalogError, DistributionError};
use thiserror::Error;

use super::config::{MAX_NUM_SAMPLES, MAX_SAMPLE_SIZE};

/// Configuration error for a sampling run.
///
/// Raised before any variate is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample size outside `[1, MAX_SAMPLE_SIZE]`.
    #[error("Invalid sample size {0}: must be in range [1, {max}]", max = MAX_SAMPLE_SIZE)]
    InvalidSampleSize(usize),

    /// Number of samples outside `[1, MAX_NUM_SAMPLES]`.
    #[error("Invalid number of samples {0}: must be in range [1, {max}]", max = MAX_NUM_SAMPLES)]
    InvalidSampleCount(usize),

    /// A required setting was absent or malformed.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Errors from registry lookups and sampling runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The population name is not registered.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The registered parameters were rejected by the family.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// The run configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SimulationError {
    /// True when the error is an unknown population name.
    pub fn is_unknown_distribution(&self) -> bool {
        matches!(self, SimulationError::Catalog(CatalogError::UnknownDistribution(_)))
    }
}
