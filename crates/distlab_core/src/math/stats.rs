//! Descriptive statistics over `f64` slices.
//!
//! Means use Kahan compensated summation; variances use Welford's running
//! update. Every function returns `None` instead of NaN when its result is
//! undefined (too few values or non-finite input).

/// Kahan compensated sum.
fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &x in data {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Running mean and sum of squared deviations.
#[derive(Debug, Clone, Copy, Default)]
struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn from_slice(data: &[f64]) -> Self {
        let mut acc = Self::default();
        for &x in data {
            acc.count += 1;
            let delta = x - acc.mean;
            acc.mean += delta / acc.count as f64;
            acc.m2 += delta * (x - acc.mean);
        }
        acc
    }
}

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

/// Arithmetic mean.
///
/// `None` for empty or non-finite input.
///
/// # Example
///
/// ```
/// use distlab_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Sample variance with Bessel's correction (divisor `n - 1`).
///
/// `None` for fewer than two values or non-finite input.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !all_finite(data) {
        return None;
    }
    let acc = Welford::from_slice(data);
    Some((acc.m2 / (acc.count - 1) as f64).max(0.0))
}

/// Sample standard deviation (divisor `n - 1`).
pub fn sample_std(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Population variance (divisor `n`).
///
/// `None` for empty or non-finite input.
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    let acc = Welford::from_slice(data);
    Some((acc.m2 / acc.count as f64).max(0.0))
}

/// Population standard deviation (divisor `n`).
pub fn population_std(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Minimum and maximum of the slice.
///
/// `None` for empty input or when any value is NaN.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

/// `points` evenly spaced values from `start` to `end` inclusive.
///
/// A single point yields `[start]`; zero points an empty vector. The last
/// element is exactly `end`.
///
/// # Example
///
/// ```
/// use distlab_core::math::stats::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            let mut xs: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
            xs[points - 1] = end;
            xs
        }
    }
}
