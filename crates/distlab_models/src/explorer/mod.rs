//! Distribution catalogue and evaluator.
//!
//! This module provides:
//! - `catalog`: The twelve catalogue entries, listing, schemas and clamping
//! - `query`: Moments, quartiles and random samples of a parameterised entry
//! - `curve`: Density and mass curves for plotting
//! - `scenario`: Real-world scenario text
//!
//! Raw caller parameters always pass through the entry's schema before they
//! reach a distribution, so out-of-range input is saturated, never rejected.

pub mod catalog;
pub mod curve;
pub mod query;
pub mod scenario;

pub use catalog::{clamp_params, entries, list_by_kind, lookup, param_spec, CatalogEntry, KindListing};
pub use curve::{
    density_curve, density_curve_with_points, DensityCurve, MAX_EXPLICIT_DISCRETE_POINTS,
};
pub use query::{evaluate, sample, DistributionQueryResult};
pub use scenario::scenario_text;
