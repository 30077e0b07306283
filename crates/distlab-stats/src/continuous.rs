//! Continuous summary engine
//!
//! Provides the summary shown next to a histogram of measurements:
//! - Mean and population standard deviation (divide by N, not N - 1)
//! - A fixed-bin-count histogram covering `[min, max]` exactly
//! - The 1σ/2σ/3σ intervals around the mean
//!
//! # Binning
//!
//! `histogram` splits `[min, max]` into `bin_count` bins of equal width.
//! Every bin is half-open `[start, end)` except the last, which is closed
//! so the maximum is always counted. A value is assigned to the first bin
//! whose interval contains it, so no value is counted twice or dropped.
//! When all values are identical the width is zero; every bin is then the
//! zero-width interval `[min, min]` and bin 0 holds every value.
//!
//! Ranges wider than `f64::MAX` (for example `[-1e308, 1e308]`) are handled
//! by scaling before subtracting, so edges, mean and standard deviation
//! stay finite for any finite input.

use serde::{Deserialize, Serialize};

/// Number of bins used by [`summarize`]
pub const BIN_COUNT: usize = 5;

/// Share of normally distributed data within 1, 2 and 3 standard deviations
const NORMAL_COVERAGE: [(u32, f64); 3] = [(1, 0.68), (2, 0.95), (3, 0.997)];

/// A labeled measurement entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ContinuousRecord {
    pub label: String,
    pub value: f64,
}

impl ContinuousRecord {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A histogram bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Bin {
    /// Inclusive lower edge
    pub range_start: f64,
    /// Upper edge (exclusive, except for the last bin)
    pub range_end: f64,
    /// Number of values assigned to this bin
    pub count: u64,
    /// `"{start}-{end}"` with one decimal
    pub label: String,
}

impl Bin {
    fn new(range_start: f64, range_end: f64, count: u64) -> Self {
        Self {
            range_start,
            range_end,
            count,
            label: format!("{:.1}-{:.1}", range_start, range_end),
        }
    }

    pub fn width(&self) -> f64 {
        self.range_end - self.range_start
    }
}

/// An interval of `mean ± sigmas * std_dev`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SigmaRange {
    /// Number of standard deviations (1, 2 or 3)
    pub sigmas: u32,
    /// Share of a normal distribution inside the interval
    pub coverage: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Summary statistics and histogram for a list of measurements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ContinuousSummary {
    /// Number of finite values summarized
    pub count: u64,
    /// Number of NaN/infinite values skipped
    pub missing: u64,
    /// Arithmetic mean (0 for empty input)
    pub mean: f64,
    /// Population standard deviation (0 for empty input)
    pub std_dev: f64,
    /// Smallest value, if any
    pub min: Option<f64>,
    /// Largest value, if any
    pub max: Option<f64>,
    /// Histogram bins in ascending order (empty for empty input)
    pub bins: Vec<Bin>,
}

impl ContinuousSummary {
    /// The 1σ, 2σ and 3σ intervals around the mean
    ///
    /// These are display values only; nothing checks that the data is
    /// actually normally distributed.
    pub fn sigma_ranges(&self) -> Vec<SigmaRange> {
        NORMAL_COVERAGE
            .iter()
            .map(|&(sigmas, coverage)| {
                let half_width = sigmas as f64 * self.std_dev;
                SigmaRange {
                    sigmas,
                    coverage,
                    lower: saturate(self.mean - half_width),
                    upper: saturate(self.mean + half_width),
                }
            })
            .collect()
    }

    /// Sum of all bin counts
    pub fn binned_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Summarize a list of measurements
pub fn summarize(records: &[ContinuousRecord]) -> ContinuousSummary {
    let values: Vec<f64> = records
        .iter()
        .map(|r| r.value)
        .filter(|v| v.is_finite())
        .collect();
    let missing = (records.len() - values.len()) as u64;
    let (min, max) = match bounds(&values) {
        Some((min, max)) => (Some(min), Some(max)),
        None => (None, None),
    };

    ContinuousSummary {
        count: values.len() as u64,
        missing,
        mean: mean(&values),
        std_dev: population_std_dev(&values),
        min,
        max,
        bins: histogram(&values, BIN_COUNT),
    }
}

/// Arithmetic mean, or 0 for empty input
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return sum / n;
    }
    // The sum overflowed; dividing first keeps every term and the total finite
    values.iter().map(|v| v / n).sum()
}

/// Population standard deviation (divide by N), or 0 for empty input
pub fn population_std_dev(values: &[f64]) -> f64 {
    match bounds(values) {
        None => return 0.0,
        // Identical values: the mean may carry rounding error, the spread must not
        Some((min, max)) if min == max => return 0.0,
        Some(_) => {}
    }
    let n = values.len() as f64;
    let mean = mean(values);
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    if variance.is_finite() {
        return variance.sqrt();
    }

    // Squared deviations overflowed; work in units of the largest magnitude
    let scale = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    let scaled_mean = mean / scale;
    let scaled_variance = values
        .iter()
        .map(|x| (x / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / n;
    saturate(scaled_variance.sqrt() * scale)
}

/// Build an equal-width histogram over `[min, max]`
///
/// Non-finite values are ignored. Returns no bins for empty input or a zero
/// bin count. When every value is identical all bins are `[min, min]` and
/// bin 0 holds every value.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<Bin> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };
    if bin_count == 0 {
        return Vec::new();
    }
    let finite = values.iter().copied().filter(|v| v.is_finite());

    let n = bin_count as f64;
    let span = max - min;
    let width = if span.is_finite() {
        span / n
    } else {
        max / n - min / n
    };
    // The last edge is pinned to max so rounding can never leave it uncovered
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| {
            if i == bin_count {
                max
            } else {
                min + i as f64 * width
            }
        })
        .collect();

    let mut counts = vec![0u64; bin_count];
    if min == max {
        counts[0] = finite.count() as u64;
    } else {
        for value in finite {
            counts[bin_index(value, &edges)] += 1;
        }
    }

    edges
        .windows(2)
        .zip(counts)
        .map(|(edge, count)| Bin::new(edge[0], edge[1], count))
        .collect()
}

/// First bin whose half-open interval holds `value`, else the closed last bin
fn bin_index(value: f64, edges: &[f64]) -> usize {
    let last = edges.len() - 2;
    edges[1..=last]
        .iter()
        .position(|&end| value < end)
        .unwrap_or(last)
}

/// Clamp an overflowed result to the largest finite value of the same sign
fn saturate(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}
