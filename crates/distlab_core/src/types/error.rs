//! Error types for structured error handling.
//!
//! This module provides:
//! - `CatalogError`: Errors from catalogue lookups (unknown names)
//! - `DistributionError`: Errors from constructing a distribution family
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Catalogue lookup errors.
///
/// An unknown name is the only fatal condition of every catalogue
/// operation. It is never retried and never silently defaulted.
///
/// # Examples
/// ```
/// use distlab_core::types::CatalogError;
///
/// let err = CatalogError::UnknownDistribution("Cauchy".to_string());
/// assert_eq!(format!("{}", err), "Unknown distribution: Cauchy");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested name is not registered in the catalogue.
    #[error("Unknown distribution: {0}")]
    UnknownDistribution(String),
}

impl CatalogError {
    /// Create an unknown-distribution error for `name`.
    pub fn unknown(name: impl Into<String>) -> Self {
        CatalogError::UnknownDistribution(name.into())
    }
}

/// Distribution construction errors.
///
/// Raised by family adapters when the statistical backend rejects a
/// parameterisation. Catalogue callers clamp parameters first, so this only
/// surfaces for direct construction with out-of-range values.
///
/// # Variants
/// - `InvalidParameters`: The backend rejected the parameter combination
/// - `MissingParameter`: A required parameter was not supplied
///
/// # Examples
/// ```
/// use distlab_core::types::DistributionError;
///
/// let err = DistributionError::MissingParameter("scale");
/// assert!(format!("{}", err).contains("scale"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate the family's constraints.
    #[error("Invalid {family} parameters: {reason}")]
    InvalidParameters {
        /// Family name (e.g. "Gamma")
        family: &'static str,
        /// Backend error description
        reason: String,
    },

    /// A declared parameter was absent from the value map.
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),
}

impl DistributionError {
    /// Wrap a backend error for `family`.
    pub fn invalid(family: &'static str, reason: impl ToString) -> Self {
        DistributionError::InvalidParameters {
            family,
            reason: reason.to_string(),
        }
    }
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Non-finite function values or bracket search failure
///
/// # Examples
/// ```
/// use distlab_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_distribution_display() {
        let err = CatalogError::unknown("Weibull");
        assert_eq!(err.to_string(), "Unknown distribution: Weibull");
        assert_eq!(err, CatalogError::UnknownDistribution("Weibull".into()));
    }

    #[test]
    fn test_distribution_error_display() {
        let err = DistributionError::invalid("Gamma", "shape must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid Gamma parameters: shape must be positive"
        );

        let err = DistributionError::MissingParameter("df");
        assert_eq!(err.to_string(), "Missing parameter: df");
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        assert!(err.to_string().contains("same sign"));

        let err = SolverError::NumericalInstability("cdf returned NaN".into());
        assert!(err.to_string().contains("cdf returned NaN"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CatalogError::unknown("x"));
        assert_error(&DistributionError::MissingParameter("p"));
        assert_error(&SolverError::MaxIterationsExceeded { iterations: 1 });
    }
}
