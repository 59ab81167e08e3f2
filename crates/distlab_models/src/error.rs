//! Error types for explorer operations.
//!
//! This module provides:
//! - `ModelError`: Errors from catalogue lookups and distribution construction

use distlab_core::types::{CatalogError, DistributionError};
use thiserror::Error;

/// Explorer operation errors.
///
/// After clamping, construction cannot fail for catalogue entries, so in
/// practice `Catalog` is the only variant callers observe.
///
/// # Examples
/// ```
/// use distlab_core::types::CatalogError;
/// use distlab_models::ModelError;
///
/// let err: ModelError = CatalogError::unknown("Cauchy").into();
/// assert_eq!(format!("{}", err), "Unknown distribution: Cauchy");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Catalogue lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The backend rejected a parameter combination.
    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

impl ModelError {
    /// True when the error is an unknown catalogue name.
    pub fn is_unknown_distribution(&self) -> bool {
        matches!(self, ModelError::Catalog(CatalogError::UnknownDistribution(_)))
    }
}
