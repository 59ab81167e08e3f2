//! Core catalogue and parameter types.
//!
//! This module provides:
//! - `error`: Structured error types for catalogue lookups, distribution
//!   construction and root-finding
//! - `kind`: The continuous/discrete distinction
//! - `params`: Parameter specifications, schemas and clamping
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`CatalogError`], [`DistributionError`], [`SolverError`] from `error`
//! - [`DistributionKind`] from `kind`
//! - [`ParamSpec`], [`ParamSchema`], [`ParamValues`] from `params`

pub mod error;
pub mod kind;
pub mod params;

pub use error::{CatalogError, DistributionError, SolverError};
pub use kind::DistributionKind;
pub use params::{ParamSchema, ParamSpec, ParamValues};
