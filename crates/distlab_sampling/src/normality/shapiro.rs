//! Shapiro–Wilk W test.
//!
//! Coefficients and p-value follow Royston's approximation (Applied
//! Statistics algorithm AS R94, 1995), valid for 3 ≤ n ≤ 5000. Larger
//! samples are still evaluated.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_3, PI};

use super::{check_input, std_normal_ppf, std_normal_sf, NormalityError};

const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// Smallest p-value reported when `W` falls beyond the small-sample bound.
const P_FLOOR: f64 = 1e-99;

/// Result of a Shapiro–Wilk test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    /// The W statistic, in `(0, 1]`.
    pub statistic: f64,
    /// Probability of a W at least this small under normality.
    pub p_value: f64,
}

fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Weights `a_1..a_{n/2}` for the lower half of the ordered sample.
///
/// The full coefficient vector is antisymmetric with unit norm.
fn half_coefficients(n: usize) -> Vec<f64> {
    let half = n / 2;
    if n == 3 {
        return vec![FRAC_1_SQRT_2];
    }

    let an = n as f64;
    let m: Vec<f64> = (1..=half)
        .map(|i| std_normal_ppf((i as f64 - 0.375) / (an + 0.25)))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();

    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    let mut a = vec![0.0; half];
    a[0] = a1;

    let (first, fac) = if n > 5 {
        let a2 = poly(&C2, rsn) - m[1] / ssumm2;
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };

    for i in first..half {
        a[i] = -m[i] / fac;
    }
    a
}

fn p_value(w: f64, n: usize) -> f64 {
    let an = n as f64;
    if n == 3 {
        return (6.0 / PI * ((w.sqrt()).asin() - FRAC_PI_3)).max(0.0);
    }

    let y = (1.0 - w).ln();
    let (y, m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return P_FLOOR;
        }
        (-(gamma - y).ln(), poly(&C3, an), poly(&C4, an).exp())
    } else {
        let x = an.ln();
        (y, poly(&C5, x), poly(&C6, x).exp())
    };

    std_normal_sf((y - m) / s).clamp(0.0, 1.0)
}

/// Shapiro–Wilk test of the hypothesis that `values` come from a normal
/// distribution.
///
/// # Errors
///
/// - `NormalityError::TooFewValues` for fewer than 3 values
/// - `NormalityError::NonFinite` if any value is NaN or infinite
/// - `NormalityError::ZeroRange` if all values are identical
///
/// # Example
///
/// ```
/// use distlab_sampling::normality::shapiro_wilk;
///
/// let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((result.statistic - 1.0).abs() < 1e-12);
/// ```
pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilk, NormalityError> {
    check_input(values, 3)?;
    let n = values.len();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    if sorted[n - 1] - sorted[0] <= 0.0 {
        return Err(NormalityError::ZeroRange);
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let centred: Vec<f64> = sorted.iter().map(|x| x - mean).collect();
    let ss: f64 = centred.iter().map(|d| d * d).sum();

    let a = half_coefficients(n);
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (centred[n - 1 - i] - centred[i]))
        .sum();
    let norm: f64 = 2.0 * a.iter().map(|ai| ai * ai).sum::<f64>();

    let w = (numerator * numerator / (norm * ss)).min(1.0);
    Ok(ShapiroWilk {
        statistic: w,
        p_value: p_value(w, n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;
    use approx::assert_abs_diff_eq;
    use distlab_core::traits::ParametricDistribution;
    use distlab_models::families::{Exponential, Normal};

    #[test]
    fn test_coefficients_have_unit_norm() {
        for n in [4, 5, 6, 11, 12, 50, 501] {
            let a = half_coefficients(n);
            let norm: f64 = 2.0 * a.iter().map(|v| v * v).sum::<f64>();
            assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-10);
            assert!(a.windows(2).all(|w| w[0] > w[1]), "n = {}", n);
        }
    }

    #[test]
    fn test_three_equally_spaced_points() {
        let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
        assert_abs_diff_eq!(result.statistic, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_three_points_lower_bound() {
        // W attains its minimum 3/4 for n = 3.
        let result = shapiro_wilk(&[0.0, 0.0, 1.0]).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_location_scale_invariance() {
        let values = [2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8, 6.1, 3.9, 4.2, 2.5, 3.1, 4.8];
        let shifted: Vec<f64> = values.iter().map(|x| 10.0 + 3.0 * x).collect();
        let a = shapiro_wilk(&values).unwrap();
        let b = shapiro_wilk(&shifted).unwrap();
        assert_abs_diff_eq!(a.statistic, b.statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(a.p_value, b.p_value, epsilon = 1e-10);
    }

    #[test]
    fn test_normal_sample_not_rejected() {
        let mut rng = SamplerRng::from_seed(2024);
        let draws = Normal::new(0.0, 1.0).unwrap().sample_n(&mut rng, 200);
        let result = shapiro_wilk(&draws).unwrap();
        assert!(result.statistic > 0.95);
        assert!(result.p_value > 0.001);
    }

    #[test]
    fn test_exponential_sample_rejected() {
        let mut rng = SamplerRng::from_seed(2024);
        let draws = Exponential::new(1.0).unwrap().sample_n(&mut rng, 500);
        let result = shapiro_wilk(&draws).unwrap();
        assert!(result.p_value < 1e-6);
    }

    #[test]
    fn test_small_sample_branch() {
        let result = shapiro_wilk(&[1.0, 1.5, 2.0, 2.0, 2.5, 3.0, 3.5]).unwrap();
        assert!(result.statistic > 0.9 && result.statistic <= 1.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            shapiro_wilk(&[1.0, 2.0]).unwrap_err(),
            NormalityError::TooFewValues { required: 3, actual: 2 }
        );
        assert_eq!(shapiro_wilk(&[4.0; 10]).unwrap_err(), NormalityError::ZeroRange);
        assert_eq!(
            shapiro_wilk(&[1.0, f64::NAN, 3.0]).unwrap_err(),
            NormalityError::NonFinite
        );
    }
}
