//! # distlab_models (L2: Distribution Families)
//!
//! Parametric distribution families and the interactive explorer catalogue.
//!
//! This crate provides:
//! - Family adapters over `statrs` densities and `rand_distr` samplers with
//!   closed-form moments (`families`)
//! - The [`DistributionModel`](families::DistributionModel) enum for static
//!   dispatch over all twelve families
//! - The explorer: catalogue listing, parameter schemas and clamping,
//!   moment/quantile evaluation, density curves and scenario text
//!   (`explorer`)
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** over family adapters, no trait objects
//! - **Clamp, never reject**: parameter ranges saturate user input
//! - **Undefined is `None`**: divergent moments never surface as NaN
//!
//! ## Example
//!
//! ```
//! use distlab_models::explorer::{density_curve, evaluate};
//! use std::collections::BTreeMap;
//!
//! let raw = BTreeMap::from([("df".to_string(), 5.0)]);
//!
//! let summary = evaluate("Student-t", &raw).unwrap();
//! assert!((summary.variance.unwrap() - 5.0 / 3.0).abs() < 1e-12);
//!
//! let curve = density_curve("Student-t", &raw, None).unwrap();
//! assert!(curve.y.iter().all(|y| y.is_finite() && *y >= 0.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod explorer;
pub mod families;

pub use error::ModelError;
pub use families::{DistributionModel, Family};
