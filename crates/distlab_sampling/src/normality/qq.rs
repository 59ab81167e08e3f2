//! Normal Q-Q plot data.

use distlab_core::traits::defined;
use serde::Serialize;

use super::std_normal_ppf;

/// Ordered sample against normal order-statistic medians, with the
/// least-squares line through the points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QqPlot {
    /// Theoretical standard normal quantiles.
    pub theoretical: Vec<f64>,
    /// Finite sample values in ascending order.
    pub ordered: Vec<f64>,
    /// Slope of the fitted line.
    pub slope: Option<f64>,
    /// Intercept of the fitted line.
    pub intercept: Option<f64>,
    /// Correlation between `theoretical` and `ordered`.
    pub r: Option<f64>,
}

impl QqPlot {
    /// Fitted line evaluated at each theoretical quantile.
    pub fn fitted(&self) -> Option<Vec<f64>> {
        let (slope, intercept) = self.slope.zip(self.intercept)?;
        Some(self.theoretical.iter().map(|q| intercept + slope * q).collect())
    }
}

/// Filliben's estimate of the uniform order-statistic medians.
fn filliben_medians(n: usize) -> Vec<f64> {
    let nf = n as f64;
    let last = 0.5_f64.powf(1.0 / nf);
    (1..=n)
        .map(|i| match i {
            1 => 1.0 - last,
            i if i == n => last,
            i => (i as f64 - 0.3175) / (nf + 0.365),
        })
        .collect()
}

/// Q-Q data for `values` against the standard normal.
///
/// Non-finite values are dropped. With fewer than two points, or a constant
/// sample, the fit is undefined.
///
/// # Example
///
/// ```
/// use distlab_sampling::normality::qq_plot;
///
/// let qq = qq_plot(&[3.0, 1.0, 2.0]);
/// assert_eq!(qq.ordered, vec![1.0, 2.0, 3.0]);
/// assert!(qq.theoretical[1].abs() < 1e-12);
/// assert!(qq.r.unwrap() > 0.99);
/// ```
pub fn qq_plot(values: &[f64]) -> QqPlot {
    let mut ordered: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    ordered.sort_by(f64::total_cmp);

    let theoretical: Vec<f64> = filliben_medians(ordered.len())
        .into_iter()
        .map(std_normal_ppf)
        .collect();

    let (slope, intercept, r) = least_squares(&theoretical, &ordered);
    QqPlot {
        theoretical,
        ordered,
        slope,
        intercept,
        r,
    }
}

fn least_squares(x: &[f64], y: &[f64]) -> (Option<f64>, Option<f64>, Option<f64>) {
    if x.len() < 2 {
        return (None, None, None);
    }
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let (sxx, syy, sxy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (xi, yi)| {
        let (dx, dy) = (xi - x_mean, yi - y_mean);
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });

    let slope = defined(sxy / sxx);
    let intercept = slope.and_then(|b| defined(y_mean - b * x_mean));
    let r = if syy > 0.0 {
        defined(sxy / (sxx * syy).sqrt())
    } else {
        None
    };
    (slope, intercept, r)
}
