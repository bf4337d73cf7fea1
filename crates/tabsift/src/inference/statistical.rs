//! Descriptive statistics over column values.

use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Streaming statistics accumulator using Welford's algorithm.
#[derive(Debug, Clone)]
struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value using Welford's online algorithm.
    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Sample variance (n - 1 denominator); undefined below two values.
    fn sample_variance(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }
}

/// Descriptive statistics for one numeric column.
///
/// Every statistic except `count` is `None` when it is undefined for the
/// input (no values, or a single value for `std`).
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

/// Compute count, mean, sample std, min, quartiles and max.
pub fn describe(values: &[f64]) -> Describe {
    let mut stats = StreamingStats::new();
    for &v in values {
        stats.add(v);
    }

    if stats.count == 0 {
        return Describe {
            count: 0,
            mean: None,
            std: None,
            min: None,
            q1: None,
            median: None,
            q3: None,
            max: None,
        };
    }

    let sorted = sorted_copy(values);
    Describe {
        count: stats.count,
        mean: Some(stats.mean),
        std: stats.sample_variance().map(f64::sqrt),
        min: Some(stats.min),
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: Some(stats.max),
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Quantile with linear interpolation between closest ranks.
fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    let lo = sorted[lower];
    let hi = sorted[upper.min(sorted.len() - 1)];
    if frac == 0.0 {
        Some(lo)
    } else {
        Some(lo + (hi - lo) * frac)
    }
}

/// Round to `decimals` places, halves to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Median of the values, or `None` when there are none.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile_sorted(&sorted_copy(values), 0.5)
}

/// Frequency table in descending count order; ties keep first-seen order.
pub fn value_counts<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    // Stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Most frequent value; ties resolve to the smallest value.
pub fn mode<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, _)| value.to_string())
}
