//! Summaries: counts, percentages, confidence means, and their properties.

use proptest::prelude::*;
use test_fixtures::{mixed, record, records};
use vigil_core::traits::Record;
use vigil_metrics::summarize;

#[test]
fn empty_input_yields_zeroed_summary() {
    let s = summarize(&[]);
    assert_eq!(s.total_count, 0);
    assert!(s.label_counts.is_empty());
    assert!(s.label_percentages.is_empty());
    assert_eq!(s.mean_confidence, 0.0);
    assert!(s.mean_confidence_by_label.is_empty());
    assert!(s.is_empty());
    assert!(s.distribution().is_empty());
}

#[test]
fn three_way_sentiment_counts_and_mean() {
    let logs = vec![
        record("positive", 0.9),
        record("negative", 0.8),
        record("neutral", 0.5),
    ];
    let s = summarize(&logs);
    assert_eq!(s.total_count, 3);
    assert_eq!(s.label_counts.len(), 3);
    assert_eq!(s.label_counts["positive"], 1);
    assert_eq!(s.label_counts["negative"], 1);
    assert_eq!(s.label_counts["neutral"], 1);
    assert!((s.mean_confidence - 0.7333).abs() < 1e-3);
}

#[test]
fn weighted_mean_matches_exact_average() {
    let logs = mixed(&[("A", 80, 0.9), ("B", 70, 0.3)]);
    let s = summarize(&logs);
    let expected = (0.9 * 80.0 + 0.3 * 70.0) / 150.0;
    assert_eq!(s.total_count, 150);
    assert!((s.mean_confidence - expected).abs() < 1e-9);
    assert!((s.mean_confidence_by_label["A"] - 0.9).abs() < 1e-9);
    assert!((s.mean_confidence_by_label["B"] - 0.3).abs() < 1e-9);
}

#[test]
fn percentages_are_independent_per_label() {
    let logs = mixed(&[("A", 1, 0.9), ("B", 3, 0.9)]);
    let s = summarize(&logs);
    assert!((s.label_percentages["A"] - 25.0).abs() < 1e-9);
    assert!((s.label_percentages["B"] - 75.0).abs() < 1e-9);
    // Only predicted labels are counted, never the other score keys.
    assert!(s.label_counts.keys().all(|k| !k.starts_with('~')));
}

#[test]
fn summary_passes_its_own_validation() {
    let s = summarize(&records("only", 0.6, 7));
    assert!(s.validate().is_ok());
    assert_eq!(s.label_percentages["only"], 100.0);
}

proptest! {
    #[test]
    fn prop_percentages_sum_to_one_hundred(
        groups in proptest::collection::vec((0usize..4, 1usize..30, 20u32..100), 1..6)
    ) {
        let labels = ["alpha", "beta", "gamma", "delta"];
        let plan: Vec<(&str, usize, f64)> = groups
            .iter()
            .map(|&(l, n, c)| (labels[l], n, c as f64 / 100.0))
            .collect();
        let s = summarize(&mixed(&plan));

        let sum: f64 = s.label_percentages.values().sum();
        prop_assert!((sum - 100.0).abs() < 1e-4);
        prop_assert_eq!(s.total_count, s.label_counts.values().sum::<usize>());
        prop_assert!(s.mean_confidence >= 0.2 - 1e-12 && s.mean_confidence <= 1.0);
    }

    #[test]
    fn prop_summary_ignores_input_order(
        groups in proptest::collection::vec((0usize..3, 1usize..10), 1..5)
    ) {
        let labels = ["a", "b", "c"];
        let plan: Vec<(&str, usize, f64)> =
            groups.iter().map(|&(l, n)| (labels[l], n, 0.8)).collect();
        let forward = mixed(&plan);
        let mut backward = forward.clone();
        backward.reverse();

        let f = summarize(&forward);
        let b = summarize(&backward);
        prop_assert_eq!(f.label_counts, b.label_counts);
        prop_assert_eq!(f.label_percentages, b.label_percentages);
    }
}
