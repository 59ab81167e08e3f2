//! # distlab_core: Foundation Layer for the Distribution Explorer
//!
//! ## Layer 1 (Foundation) Role
//!
//! distlab_core is the bottom layer of the workspace and provides:
//! - Error types: `CatalogError`, `DistributionError`, `SolverError` (`types::error`)
//! - Distribution kind and parameter schemas with clamping (`types`)
//! - The `ParametricDistribution` capability trait (`traits`)
//! - Numeric helpers: Brent root finding, CDF inversion and descriptive
//!   statistics (`math`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other distlab_* crates and only a small set
//! of external dependencies:
//! - num-traits: generic floating-point solvers
//! - thiserror: error derivation
//! - serde: serialisation of result records
//! - tracing: diagnostics for degraded numeric paths
//!
//! ## Usage Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use distlab_core::types::{ParamSchema, ParamSpec};
//!
//! let schema = ParamSchema::new(vec![
//!     ("scale", ParamSpec::new("Scale (1/λ)", 1.0, 0.1, 5.0, 0.1)),
//! ]);
//!
//! let mut raw = BTreeMap::new();
//! raw.insert("scale".to_string(), 42.0);
//!
//! let validated = schema.clamp(&raw);
//! assert_eq!(validated["scale"], 5.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
