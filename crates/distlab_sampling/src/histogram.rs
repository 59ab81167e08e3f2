//! Equal-width histograms of samples.

use distlab_core::math::stats;
use serde::Serialize;

/// Bin edges and heights of a histogram.
///
/// `edges` has one more element than `heights`. Every bin is half-open
/// `[lo, hi)` except the last, which includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Bin boundaries in ascending order.
    pub edges: Vec<f64>,
    /// Count, or probability density, per bin.
    pub heights: Vec<f64>,
}

impl Histogram {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            heights: Vec::new(),
        }
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.heights.len()
    }

    /// Bin centres.
    pub fn centres(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }
}

/// Bin the finite elements of `values` into `bins` equal-width bins
/// spanning their range.
///
/// With `density` set, heights are normalised so the histogram integrates
/// to one; otherwise they are counts. A constant sample is binned over
/// `[x - 0.5, x + 0.5]`. No bins or no finite values give an empty
/// histogram.
///
/// # Example
///
/// ```
/// use distlab_sampling::histogram;
///
/// let h = histogram(&[0.0, 0.5, 1.0, 1.0], 2, false);
/// assert_eq!(h.edges, vec![0.0, 0.5, 1.0]);
/// assert_eq!(h.heights, vec![1.0, 3.0]);
/// ```
pub fn histogram(values: &[f64], bins: usize, density: bool) -> Histogram {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    let Some((lo, hi)) = stats::min_max(&finite).filter(|_| bins > 0) else {
        return Histogram::empty();
    };
    let (lo, hi) = if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) };

    let edges = stats::linspace(lo, hi, bins + 1);
    let width = (hi - lo) / bins as f64;
    let mut heights = vec![0.0; bins];
    for x in &finite {
        let index = (((x - lo) / width) as usize).min(bins - 1);
        heights[index] += 1.0;
    }

    if density {
        let total = finite.len() as f64 * width;
        heights.iter_mut().for_each(|h| *h /= total);
    }
    Histogram { edges, heights }
}
