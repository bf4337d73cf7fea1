//! Equal-width binning of numeric columns for histogram charts.

use serde::{Deserialize, Serialize};

use crate::schema::format_float;

/// Fraction of the range the lowest edge is pushed down by, so the minimum
/// falls inside the first right-closed bin.
const EDGE_ADJUSTMENT: f64 = 0.001;

/// Label precision before widening to keep labels distinct.
const BASE_PRECISION: i32 = 3;

/// One histogram bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBin {
    /// Interval label, e.g. `(12.5, 25.0]`.
    pub name: String,
    /// Number of values in the interval.
    pub value: usize,
}

/// Histogram for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericDistribution {
    pub column: String,
    pub bins: Vec<DistributionBin>,
}

/// Split values into `bins` equal-width right-closed intervals over
/// `[min, max]`.
///
/// Non-finite values are ignored. Returns an empty vector when nothing is
/// left to bin. Every interval is reported, including empty ones.
pub fn equal_width_bins(values: &[f64], bins: usize) -> Vec<DistributionBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let edges = bin_edges(&finite, bins);

    let mut counts = vec![0usize; bins];
    for &v in &finite {
        // First edge >= v closes the interval containing v
        let upper = edges.partition_point(|&edge| edge < v);
        if upper >= 1 && upper <= bins {
            counts[upper - 1] += 1;
        }
    }

    let labels = interval_labels(&edges);
    labels
        .into_iter()
        .zip(counts)
        .map(|(name, value)| DistributionBin { name, value })
        .collect()
}

/// `bins + 1` increasing edges spanning the data.
fn bin_edges(values: &[f64], bins: usize) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        let low = if min != 0.0 {
            min - EDGE_ADJUSTMENT * min.abs()
        } else {
            -EDGE_ADJUSTMENT
        };
        let high = if max != 0.0 {
            max + EDGE_ADJUSTMENT * max.abs()
        } else {
            EDGE_ADJUSTMENT
        };
        return linspace(low, high, bins + 1);
    }

    let mut edges = linspace(min, max, bins + 1);
    edges[0] -= (max - min) * EDGE_ADJUSTMENT;
    edges
}

/// `count` evenly spaced points from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let divisions = (count - 1) as f64;
    let step = (stop - start) / divisions;
    let mut points: Vec<f64> = (0..count).map(|i| i as f64 * step + start).collect();
    if let Some(last) = points.last_mut() {
        *last = stop;
    }
    points
}

/// Labels `(left, right]` for consecutive edges, rounded just enough to stay
/// distinct.
fn interval_labels(edges: &[f64]) -> Vec<String> {
    let precision = label_precision(edges);
    let rounded: Vec<f64> = edges.iter().map(|&e| round_frac(e, precision)).collect();
    rounded
        .windows(2)
        .map(|pair| format!("({}, {}]", format_float(pair[0]), format_float(pair[1])))
        .collect()
}

/// Smallest precision from the base upward at which rounded edges are unique.
fn label_precision(edges: &[f64]) -> i32 {
    for precision in BASE_PRECISION..20 {
        let mut rounded: Vec<u64> = edges
            .iter()
            .map(|&e| (round_frac(e, precision) + 0.0).to_bits())
            .collect();
        rounded.sort_unstable();
        rounded.dedup();
        if rounded.len() == edges.len() {
            return precision;
        }
    }
    BASE_PRECISION
}

/// Round to `precision` decimals, or to `precision` significant digits of the
/// fraction when the whole part is zero.
fn round_frac(x: f64, precision: i32) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let whole = x.trunc();
    let digits = if whole == 0.0 {
        let frac = x.fract();
        -(frac.abs().log10().floor() as i32) - 1 + precision
    } else {
        precision
    };
    let scale = 10f64.powi(digits);
    (x * scale).round_ties_even() / scale
}
