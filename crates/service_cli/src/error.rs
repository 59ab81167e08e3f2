//! CLI error types
//!
//! Every failure surfaced to the user goes through [`CliError`].

use distlab_core::types::CatalogError;
use distlab_models::ModelError;
use distlab_sampling::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors reported by the `distlab` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: CliError = CatalogError::unknown("Cauchy").into();
        assert_eq!(err.to_string(), "Unknown distribution: Cauchy");

        let err = CliError::InvalidArgument("range must be lo,hi".to_string());
        assert_eq!(err.to_string(), "Invalid argument: range must be lo,hi");

        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error: Invalid log level: loud"));
    }
}
