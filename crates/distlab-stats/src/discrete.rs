//! Discrete frequency engine
//!
//! Converts a list of labeled counts into per-item relative frequencies.
//! Output order always matches input order; duplicate labels are kept as
//! separate rows rather than merged.

use serde::{Deserialize, Serialize};

/// A labeled count entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DiscreteRecord {
    /// Display label (for example `"Pen (Blue)"`)
    pub label: String,
    /// Number of observations
    pub count: u32,
}

impl DiscreteRecord {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One record together with its relative frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DiscreteSummary {
    pub label: String,
    pub count: u32,
    /// `count / total_count`, or 0 when the total is 0
    pub probability: f64,
}

/// Relative frequencies for a whole record list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DiscreteTable {
    /// One row per input record, in input order
    pub rows: Vec<DiscreteSummary>,
    /// Sum of all counts, exact for any realistic number of rows
    pub total_count: u64,
}

impl DiscreteTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all probabilities (1 when the total is positive, else 0)
    pub fn probability_sum(&self) -> f64 {
        self.rows.iter().map(|r| r.probability).sum()
    }
}

/// Compute the relative frequency of every record
///
/// The total is computed first, then each record's probability is taken
/// against it, so a single call always sees a consistent total.
pub fn summarize(records: &[DiscreteRecord]) -> DiscreteTable {
    let total_count: u64 = records.iter().map(|r| u64::from(r.count)).sum();

    let rows = records
        .iter()
        .map(|r| DiscreteSummary {
            label: r.label.clone(),
            count: r.count,
            probability: relative_frequency(u64::from(r.count), total_count),
        })
        .collect();

    DiscreteTable { rows, total_count }
}

/// `count / total`, with 0 for an empty total
pub fn relative_frequency(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pens() {
        let records = vec![
            DiscreteRecord::new("Pen (Blue)", 3),
            DiscreteRecord::new("Pen (Red)", 1),
        ];
        let table = summarize(&records);

        assert_eq!(table.total_count, 4);
        assert!((table.rows[0].probability - 0.75).abs() < 1e-12);
        assert!((table.rows[1].probability - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let table = summarize(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total_count, 0);
        assert_eq!(table.probability_sum(), 0.0);
    }

    #[test]
    fn test_zero_total() {
        let records = vec![
            DiscreteRecord::new("Pen (Blue)", 0),
            DiscreteRecord::new("Book (Black)", 0),
        ];
        let table = summarize(&records);

        assert_eq!(table.total_count, 0);
        assert!(table.rows.iter().all(|r| r.probability == 0.0));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let records = vec![
            DiscreteRecord::new("Book (Black)", 2),
            DiscreteRecord::new("Pen (Blue)", 1),
            DiscreteRecord::new("Book (Black)", 1),
        ];
        let table = summarize(&records);

        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Book (Black)", "Pen (Blue)", "Book (Black)"]);
        assert!((table.rows[0].probability - 0.5).abs() < 1e-12);
        assert!((table.rows[2].probability - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_total_of_large_counts_is_exact() {
        let records = vec![
            DiscreteRecord::new("Marble (Green)", u32::MAX),
            DiscreteRecord::new("Marble (Red)", 5),
        ];
        let table = summarize(&records);

        assert_eq!(table.total_count, u64::from(u32::MAX) + 5);
        let sum: u64 = table.rows.iter().map(|r| u64::from(r.count)).sum();
        assert_eq!(sum, table.total_count);
        assert!((table.probability_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_relative_frequency_guard() {
        assert_eq!(relative_frequency(5, 0), 0.0);
        assert_eq!(relative_frequency(0, 10), 0.0);
        assert_eq!(relative_frequency(10, 10), 1.0);
    }
}
