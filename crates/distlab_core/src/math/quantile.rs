//! Numerical inversion of cumulative distribution functions.
//!
//! Families without a closed-form quantile invert their CDF here:
//! - [`invert_continuous`]: bracket expansion followed by Brent's method
//! - [`invert_discrete`]: exponential search followed by bisection over the
//!   integers, returning the smallest `k` with `F(k) >= p`

use tracing::debug;

use super::solvers::{BrentSolver, SolverConfig};
use crate::types::SolverError;

/// Upper bound on bracket doublings before giving up.
const MAX_EXPANSIONS: usize = 200;

fn check_probability(p: f64) -> Result<(), SolverError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SolverError::NumericalInstability(format!(
            "probability {} outside [0, 1]",
            p
        )));
    }
    Ok(())
}

/// Invert a continuous, non-decreasing CDF.
///
/// # Arguments
///
/// * `cdf` - Cumulative distribution function
/// * `p` - Target probability in `[0, 1]`
/// * `support` - `(lower, upper)` support bounds, possibly infinite
/// * `hint` - A central value (e.g. the mean) used to seed bracket expansion
///   on infinite sides; non-finite hints fall back to 0
///
/// `p == 0` and `p == 1` return the support bounds themselves, which may be
/// infinite.
///
/// # Example
///
/// ```
/// use distlab_core::math::quantile::invert_continuous;
///
/// // Exp(1) has F(x) = 1 - e^{-x} on [0, ∞)
/// let cdf = |x: f64| if x <= 0.0 { 0.0 } else { 1.0 - (-x).exp() };
/// let median = invert_continuous(cdf, 0.5, (0.0, f64::INFINITY), 1.0).unwrap();
/// assert!((median - 2.0_f64.ln()).abs() < 1e-9);
/// ```
pub fn invert_continuous<F>(
    cdf: F,
    p: f64,
    support: (f64, f64),
    hint: f64,
) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    check_probability(p)?;
    let (lower, upper) = support;
    if p == 0.0 {
        return Ok(lower);
    }
    if p == 1.0 {
        return Ok(upper);
    }

    let center = if hint.is_finite() {
        hint.clamp(
            if lower.is_finite() { lower } else { f64::MIN },
            if upper.is_finite() { upper } else { f64::MAX },
        )
    } else {
        0.0
    };

    let lo = if lower.is_finite() {
        lower
    } else {
        expand(|step| center - step, |x| cdf(x) > p)?
    };
    let hi = if upper.is_finite() {
        upper
    } else {
        expand(|step| center.max(lo) + step, |x| cdf(x) < p)?
    };

    let solver = BrentSolver::new(SolverConfig::quantile());
    solver.find_root(|x| cdf(x) - p, lo, hi)
}

/// Double `step` until `still_short(position(step))` is false.
fn expand<P, S>(position: P, still_short: S) -> Result<f64, SolverError>
where
    P: Fn(f64) -> f64,
    S: Fn(f64) -> bool,
{
    let mut step = 1.0_f64;
    for _ in 0..MAX_EXPANSIONS {
        let x = position(step);
        if !x.is_finite() {
            break;
        }
        if !still_short(x) {
            return Ok(x);
        }
        step *= 2.0;
    }
    debug!(last_step = step, "quantile bracket expansion exhausted");
    Err(SolverError::NumericalInstability(
        "could not bracket quantile".to_string(),
    ))
}

/// Invert a discrete CDF supported on the integers `lower, lower + 1, ...`.
///
/// Returns the smallest integer `k >= lower` with `cdf(k) >= p`. For `p == 1`
/// the (possibly infinite) upper support bound is returned.
///
/// # Example
///
/// ```
/// use distlab_core::math::quantile::invert_discrete;
///
/// // Fair die: F(k) = k / 6 on {1, ..., 6}
/// let cdf = |k: f64| (k.floor() / 6.0).clamp(0.0, 1.0);
/// assert_eq!(invert_discrete(cdf, 0.5, (1.0, 6.0), 3.5).unwrap(), 3.0);
/// ```
pub fn invert_discrete<F>(
    cdf: F,
    p: f64,
    support: (f64, f64),
    hint: f64,
) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    check_probability(p)?;
    let (lower, upper) = support;
    if p == 1.0 {
        return Ok(upper);
    }

    let mut lo = lower;
    if cdf(lo) >= p {
        return Ok(lo);
    }

    // Invariant from here on: cdf(lo) < p
    let start = if hint.is_finite() { hint.ceil() } else { lo + 1.0 };
    let mut hi = start.max(lo + 1.0);
    if upper.is_finite() {
        hi = hi.min(upper);
    }
    let mut step = 1.0_f64;
    let mut expansions = 0;
    while cdf(hi) < p {
        if upper.is_finite() && hi >= upper {
            // Rounding left F(upper) a hair below p.
            return Ok(upper);
        }
        expansions += 1;
        if expansions > MAX_EXPANSIONS || !hi.is_finite() {
            debug!(p, lo, hi, "discrete quantile search exhausted");
            return Err(SolverError::NumericalInstability(
                "could not bracket discrete quantile".to_string(),
            ));
        }
        lo = hi;
        hi += step;
        if upper.is_finite() {
            hi = hi.min(upper);
        }
        step *= 2.0;
    }

    // Invariant: cdf(lo) < p <= cdf(hi)
    while hi - lo > 1.0 {
        let mid = ((lo + hi) / 2.0).floor();
        if cdf(mid) >= p {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}
