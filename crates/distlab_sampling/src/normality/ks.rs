//! One-sample Kolmogorov–Smirnov test against a fitted normal.

use distlab_core::math::stats;

use super::{check_input, std_normal_cdf, NormalityError};

const EPS1: f64 = 0.001;
const EPS2: f64 = 1.0e-8;
const MAX_TERMS: usize = 100;

/// Result of a Kolmogorov–Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KolmogorovSmirnov {
    /// Largest absolute gap `D` between the empirical and reference CDFs.
    pub statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

/// Kolmogorov survival function `Q_KS(λ) = 2 Σ (-1)^{j-1} exp(-2 j² λ²)`.
///
/// Returns 1 when the series fails to converge, which happens only for
/// very small `λ`.
pub fn kolmogorov_sf(lambda: f64) -> f64 {
    let a2 = -2.0 * lambda * lambda;
    let mut fac = 2.0;
    let mut sum = 0.0;
    let mut previous = 0.0;

    for j in 1..=MAX_TERMS {
        let j = j as f64;
        let term = fac * (a2 * j * j).exp();
        sum += term;
        if term.abs() <= EPS1 * previous || term.abs() <= EPS2 * sum {
            return sum.clamp(0.0, 1.0);
        }
        fac = -fac;
        previous = term.abs();
    }
    1.0
}

/// Two-sided KS test of `values` against `Normal(mean, σ)`, where the mean
/// and population standard deviation (divisor n) are taken from `values`.
///
/// Fitting the reference to the data makes this a test of shape only. The
/// p-value uses the asymptotic distribution with Stephens' correction
/// `λ = (√n + 0.12 + 0.11/√n)·D`.
///
/// # Errors
///
/// - `NormalityError::TooFewValues` for an empty slice
/// - `NormalityError::NonFinite` if any value is NaN or infinite
/// - `NormalityError::ZeroRange` if all values are identical
pub fn ks_normal(values: &[f64]) -> Result<KolmogorovSmirnov, NormalityError> {
    check_input(values, 1)?;
    let (mean, std) = stats::mean(values)
        .zip(stats::population_std(values))
        .ok_or(NormalityError::NonFinite)?;
    if std <= 0.0 {
        return Err(NormalityError::ZeroRange);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;

    let statistic = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| {
            let cdf = std_normal_cdf((x - mean) / std);
            let above = (i + 1) as f64 / n - cdf;
            let below = cdf - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max);

    let root_n = n.sqrt();
    let lambda = (root_n + 0.12 + 0.11 / root_n) * statistic;
    Ok(KolmogorovSmirnov {
        statistic,
        p_value: kolmogorov_sf(lambda),
    })
}
