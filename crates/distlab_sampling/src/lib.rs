//! # distlab_sampling: CLT Simulation Engine
//!
//! ## Layer 3 (Sampling) Role
//!
//! distlab_sampling draws repeated samples from a fixed set of population
//! distributions and reports how their means behave:
//! - `registry`: the eight population distributions and their moments
//! - `simulation`: run configuration, the sampling loop and statistics of
//!   the sample means
//! - `normality`: Shapiro–Wilk, Kolmogorov–Smirnov and Q-Q data
//! - `histogram`: equal-width binning for display
//! - `rng`: the seeded generator behind reproducible runs
//!
//! ## Usage Examples
//!
//! ```rust
//! use distlab_sampling::normality::normality_test;
//! use distlab_sampling::rng::SamplerRng;
//! use distlab_sampling::simulation::simulate_sampling;
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let run = simulate_sampling("Exponential(1)", 30, 1000, &mut rng).unwrap();
//!
//! let se = run.statistics.theoretical_std_of_means.unwrap();
//! assert!((se - 1.0 / 30f64.sqrt()).abs() < 1e-12);
//!
//! let tests = normality_test(&run.sample_means);
//! assert!(tests.is_complete());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod histogram;
pub mod normality;
pub mod registry;
pub mod rng;
pub mod simulation;

pub use histogram::{histogram, Histogram};
pub use normality::{normality_test, NormalityTest};
pub use registry::{describe, distribution_info, generate_population_sample, list_distributions};
pub use simulation::{simulate_sampling, SamplingRun, SamplingStatistics, SimulationConfig, SimulationError};
