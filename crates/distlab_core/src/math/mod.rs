//! Numeric helpers shared by the distribution and sampling layers.
//!
//! - [`solvers`]: Brent root finding
//! - [`quantile`]: Numerical inversion of continuous and discrete CDFs
//! - [`stats`]: Descriptive statistics over samples

pub mod quantile;
pub mod solvers;
pub mod stats;
