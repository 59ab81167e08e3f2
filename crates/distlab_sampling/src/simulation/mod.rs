//! Monte Carlo simulation of the sampling distribution of the mean.
//!
//! # Architecture
//!
//! ```text
//! simulate_sampling / run_simulation
//! ├── SimulationConfig  (validated sizes, optional seed)
//! ├── registry          (population distribution and its moments)
//! ├── SamplerRng        (random number generation)
//! └── SamplingRun
//!     ├── sample_means
//!     └── SamplingStatistics (empirical vs theoretical)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use distlab_sampling::simulation::{run_simulation, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .sample_size(30)
//!     .num_samples(1000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let run = run_simulation("Uniform[0,1]", &config).unwrap();
//! assert_eq!(run.sample_means.len(), 1000);
//! assert!(run.statistics.mean_gap().unwrap() < 0.01);
//! ```

mod config;
mod engine;
mod error;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_NUM_SAMPLES, MAX_SAMPLE_SIZE};
pub use engine::{
    run_simulation, simulate_sampling, simulate_with_config, SamplingRun, SamplingStatistics,
};
pub use error::{ConfigError, SimulationError};
