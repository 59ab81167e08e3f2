//! Normality diagnostics for collected sample means.
//!
//! - [`shapiro_wilk`]: Shapiro–Wilk W test (Royston AS R94)
//! - [`ks_normal`]: Kolmogorov–Smirnov test against a fitted normal
//! - [`qq_plot`]: normal Q-Q data with a fitted line
//!
//! [`normality_test`] runs both hypothesis tests and folds any failure into
//! the record instead of returning an error.

mod ks;
mod qq;
mod shapiro;

use std::f64::consts::SQRT_2;

use serde::Serialize;
use statrs::function::erf::{erfc, erfc_inv};
use thiserror::Error;
use tracing::{debug, warn};

pub use ks::{kolmogorov_sf, ks_normal, KolmogorovSmirnov};
pub use qq::{qq_plot, QqPlot};
pub use shapiro::{shapiro_wilk, ShapiroWilk};

/// Reasons a normality test cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalityError {
    /// Not enough observations for the test.
    #[error("At least {required} values required, got {actual}")]
    TooFewValues {
        /// Minimum sample size of the test.
        required: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Every observation is identical.
    #[error("All values are identical")]
    ZeroRange,

    /// The input contains NaN or an infinity.
    #[error("Input contains non-finite values")]
    NonFinite,
}

fn check_input(values: &[f64], required: usize) -> Result<(), NormalityError> {
    if values.len() < required {
        return Err(NormalityError::TooFewValues {
            required,
            actual: values.len(),
        });
    }
    if values.iter().any(|x| !x.is_finite()) {
        return Err(NormalityError::NonFinite);
    }
    Ok(())
}

fn std_normal_cdf(z: f64) -> f64 {
    match z {
        z if z == f64::NEG_INFINITY => 0.0,
        z if z == f64::INFINITY => 1.0,
        z => 0.5 * erfc(-z / SQRT_2),
    }
}

fn std_normal_sf(z: f64) -> f64 {
    std_normal_cdf(-z)
}

fn std_normal_ppf(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Shapiro–Wilk and Kolmogorov–Smirnov results for one sample.
///
/// Either every statistic is present, or all are `None` and `error`
/// explains why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalityTest {
    /// Shapiro–Wilk W.
    pub shapiro_statistic: Option<f64>,
    /// Shapiro–Wilk p-value.
    pub shapiro_p_value: Option<f64>,
    /// Kolmogorov–Smirnov D.
    pub ks_statistic: Option<f64>,
    /// Kolmogorov–Smirnov p-value.
    pub ks_p_value: Option<f64>,
    /// Failure description when the tests could not be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NormalityTest {
    fn failed(error: NormalityError) -> Self {
        Self {
            shapiro_statistic: None,
            shapiro_p_value: None,
            ks_statistic: None,
            ks_p_value: None,
            error: Some(error.to_string()),
        }
    }

    /// True when both tests were evaluated.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// True when both p-values are at least `alpha`.
    ///
    /// `None` if the tests could not be evaluated.
    pub fn consistent_with_normal(&self, alpha: f64) -> Option<bool> {
        let (shapiro, ks) = self.shapiro_p_value.zip(self.ks_p_value)?;
        Some(shapiro >= alpha && ks >= alpha)
    }
}

/// Run the Shapiro–Wilk and Kolmogorov–Smirnov tests on `sample_means`.
///
/// Never fails: an invalid sample yields a record with every statistic
/// `None` and `error` set.
///
/// # Example
///
/// ```
/// use distlab_sampling::normality::normality_test;
///
/// let result = normality_test(&[1.0, 1.0]);
/// assert!(result.error.is_some());
/// assert_eq!(result.shapiro_statistic, None);
/// assert_eq!(result.ks_statistic, None);
/// ```
pub fn normality_test(sample_means: &[f64]) -> NormalityTest {
    let outcome = shapiro_wilk(sample_means).and_then(|sw| Ok((sw, ks_normal(sample_means)?)));

    match outcome {
        Ok((sw, ks)) => {
            debug!(
                n = sample_means.len(),
                w = sw.statistic,
                d = ks.statistic,
                "normality tests evaluated"
            );
            NormalityTest {
                shapiro_statistic: Some(sw.statistic),
                shapiro_p_value: Some(sw.p_value),
                ks_statistic: Some(ks.statistic),
                ks_p_value: Some(ks.p_value),
                error: None,
            }
        }
        Err(e) => {
            warn!(n = sample_means.len(), error = %e, "normality tests failed");
            NormalityTest::failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_std_normal_helpers() {
        assert_abs_diff_eq!(std_normal_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(std_normal_cdf(1.959_963_984_540_054), 0.975, epsilon = 1e-10);
        assert_abs_diff_eq!(std_normal_sf(1.0), 0.158_655_253_931_457, epsilon = 1e-10);
        assert_eq!(std_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(std_normal_sf(f64::NEG_INFINITY), 1.0);
        assert_abs_diff_eq!(std_normal_ppf(0.975), 1.959_963_984_540_054, epsilon = 1e-9);
        assert_abs_diff_eq!(std_normal_ppf(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_failure_clears_every_statistic() {
        for values in [vec![], vec![1.0, 2.0], vec![5.0; 20], vec![1.0, f64::NAN, 2.0, 3.0]] {
            let result = normality_test(&values);
            assert!(!result.is_complete());
            assert_eq!(result.shapiro_statistic, None);
            assert_eq!(result.shapiro_p_value, None);
            assert_eq!(result.ks_statistic, None);
            assert_eq!(result.ks_p_value, None);
            assert_eq!(result.consistent_with_normal(0.05), None);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            normality_test(&[1.0, 2.0]).error.as_deref(),
            Some("At least 3 values required, got 2")
        );
        assert_eq!(
            normality_test(&[5.0; 4]).error.as_deref(),
            Some("All values are identical")
        );
    }

    #[test]
    fn test_complete_result() {
        let values = [2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8, 6.1, 3.9, 4.2, 2.5, 3.1, 4.8];
        let result = normality_test(&values);
        assert!(result.is_complete());
        let w = result.shapiro_statistic.unwrap();
        assert!(w > 0.0 && w <= 1.0);
        assert!((0.0..=1.0).contains(&result.ks_p_value.unwrap()));
    }
}
