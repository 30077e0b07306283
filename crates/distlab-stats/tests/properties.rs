//! Property tests for the discrete and continuous engines

use distlab_stats::continuous::{self, histogram};
use distlab_stats::discrete;
use distlab_stats::{ContinuousRecord, DiscreteRecord, BIN_COUNT};
use proptest::prelude::*;

fn discrete_records(counts: &[u32]) -> Vec<DiscreteRecord> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| DiscreteRecord::new(format!("object {}", i), c))
        .collect()
}

fn continuous_records(values: &[f64]) -> Vec<ContinuousRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ContinuousRecord::new(format!("object {}", i), v))
        .collect()
}

/// Index of every bin whose interval contains `value`
fn containing_bins(value: f64, bins: &[distlab_stats::Bin]) -> Vec<usize> {
    let last = bins.len() - 1;
    bins.iter()
        .enumerate()
        .filter(|(i, b)| {
            value >= b.range_start
                && (value < b.range_end || (*i == last && value <= b.range_end))
        })
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #[test]
    fn prop_probabilities_sum_to_one(counts in prop::collection::vec(0u32..10_000, 1..40)) {
        let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        prop_assume!(total > 0);
        let table = discrete::summarize(&discrete_records(&counts));

        prop_assert!((table.probability_sum() - 1.0).abs() < 1e-9);
        prop_assert_eq!(table.total_count, total);
    }

    #[test]
    fn prop_zero_total_gives_zero_probabilities(len in 0usize..20) {
        let table = discrete::summarize(&discrete_records(&vec![0; len]));

        prop_assert_eq!(table.len(), len);
        prop_assert!(table.rows.iter().all(|r| r.probability == 0.0));
    }

    #[test]
    fn prop_discrete_preserves_input(counts in prop::collection::vec(0u32..1_000, 0..30)) {
        let records = discrete_records(&counts);
        let table = discrete::summarize(&records);

        prop_assert_eq!(table.len(), records.len());
        for (row, record) in table.rows.iter().zip(&records) {
            prop_assert_eq!(&row.label, &record.label);
            prop_assert_eq!(row.count, record.count);
        }
    }

    #[test]
    fn prop_bin_counts_sum_to_len(values in prop::collection::vec(-1e6f64..1e6, 0..200)) {
        let summary = continuous::summarize(&continuous_records(&values));

        prop_assert_eq!(summary.binned_count(), values.len() as u64);
    }

    #[test]
    fn prop_each_value_in_exactly_one_bin(values in prop::collection::vec(-1e3f64..1e3, 2..100)) {
        prop_assume!(values.iter().any(|&v| v != values[0]));
        let bins = histogram(&values, BIN_COUNT);

        prop_assert_eq!(bins.len(), BIN_COUNT);
        for &v in &values {
            prop_assert_eq!(containing_bins(v, &bins).len(), 1);
        }
    }

    #[test]
    fn prop_bins_are_contiguous(values in prop::collection::vec(-1e3f64..1e3, 1..100)) {
        let bins = histogram(&values, BIN_COUNT);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(bins[0].range_start, min);
        prop_assert_eq!(bins[bins.len() - 1].range_end, max);
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].range_end, pair[1].range_start);
        }
    }

    #[test]
    fn prop_identical_values_fill_first_bin(value in -1e6f64..1e6, len in 1usize..50) {
        let summary = continuous::summarize(&continuous_records(&vec![value; len]));

        prop_assert_eq!(summary.std_dev, 0.0);
        prop_assert_eq!(summary.bins.len(), BIN_COUNT);
        prop_assert_eq!(summary.bins[0].count, len as u64);
        prop_assert_eq!(summary.binned_count(), len as u64);
    }

    #[test]
    fn prop_extreme_values_stay_finite(values in prop::collection::vec(
        prop_oneof![-f64::MAX..-1e300, 1e300..f64::MAX, -1e3f64..1e3],
        1..20,
    )) {
        let summary = continuous::summarize(&continuous_records(&values));

        prop_assert!(summary.mean.is_finite());
        prop_assert!(summary.std_dev.is_finite());
        prop_assert_eq!(summary.binned_count(), values.len() as u64);
        for bin in &summary.bins {
            prop_assert!(bin.range_start.is_finite() && bin.range_end.is_finite());
        }
    }
}

#[test]
fn test_entry_points_match_modules() {
    let discrete_input = vec![
        DiscreteRecord::new("Pen (Blue)", 3),
        DiscreteRecord::new("Pen (Red)", 1),
    ];
    assert_eq!(
        distlab_stats::summarize_discrete(discrete_input.clone()),
        discrete::summarize(&discrete_input)
    );

    let continuous_input = continuous_records(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(
        distlab_stats::summarize_continuous(continuous_input.clone()),
        continuous::summarize(&continuous_input)
    );
}

#[test]
fn test_summary_serializes() {
    let summary = continuous::summarize(&continuous_records(&[1.0, 2.0, 3.0]));
    let json = serde_json::to_string(&summary).unwrap();
    let parsed: distlab_stats::ContinuousSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.bins.len(), summary.bins.len());
    assert_eq!(parsed.count, 3);
}
