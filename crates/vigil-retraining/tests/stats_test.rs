//! Aggregation of a retraining history.

use chrono::Duration;
use vigil_core::config::RetrainingConfig;
use vigil_core::RetrainingVerdict;
use vigil_retraining::{aggregate_stats, decide, GateInputs};

fn verdict(minutes: i64, mean_confidence: f64, is_drifting: bool) -> RetrainingVerdict {
    let at = test_fixtures::t0() + Duration::minutes(minutes);
    let inputs = GateInputs {
        sample_count: 200,
        mean_confidence,
        drift_score: if is_drifting { 0.3 } else { 0.0 },
        is_drifting,
    };
    decide(&inputs, &RetrainingConfig::default(), at)
}

#[test]
fn empty_history() {
    let stats = aggregate_stats(&[], 5);
    assert_eq!(stats.total_evaluations, 0);
    assert_eq!(stats.triggered_count, 0);
    assert_eq!(stats.trigger_rate, 0.0);
    assert!(stats.last_triggered_at.is_none());
    assert!(stats.top_reasons.is_empty());
}

#[test]
fn rate_and_last_triggered() {
    let history = vec![
        verdict(0, 0.5, false),
        verdict(1, 0.9, false),
        verdict(2, 0.9, true),
        verdict(3, 0.9, false),
    ];
    let stats = aggregate_stats(&history, 5);
    assert_eq!(stats.total_evaluations, 4);
    assert_eq!(stats.triggered_count, 2);
    assert!((stats.trigger_rate - 0.5).abs() < 1e-12);
    assert_eq!(
        stats.last_triggered_at,
        Some(test_fixtures::t0() + Duration::minutes(2))
    );
}

#[test]
fn untriggered_reasons_are_not_counted() {
    let history = vec![verdict(0, 0.9, false), verdict(1, 0.9, false)];
    let stats = aggregate_stats(&history, 5);
    assert!(stats.top_reasons.is_empty());
}

#[test]
fn ties_keep_first_encountered_order() {
    // Three distinct triggered reasons: drift (x2), low confidence (x2), both (x1).
    let history = vec![
        verdict(0, 0.9, true),
        verdict(1, 0.5, false),
        verdict(2, 0.5, true),
        verdict(3, 0.5, false),
        verdict(4, 0.9, true),
    ];
    let stats = aggregate_stats(&history, 5);
    let reasons: Vec<(&str, usize)> = stats
        .top_reasons
        .iter()
        .map(|r| (r.reason.as_str(), r.count))
        .collect();
    assert_eq!(reasons.len(), 3);
    assert!(reasons[0].0.starts_with("drift detected"));
    assert_eq!(reasons[0].1, 2);
    assert!(reasons[1].0.starts_with("low mean confidence"));
    assert_eq!(reasons[1].1, 2);
    assert!(reasons[2].0.contains(" | "));
    assert_eq!(reasons[2].1, 1);
}

#[test]
fn top_n_truncates() {
    let history: Vec<RetrainingVerdict> = (0..8)
        .map(|i| verdict(i, 0.1 + 0.05 * i as f64, false))
        .collect();
    let stats = aggregate_stats(&history, 5);
    assert_eq!(stats.triggered_count, 8);
    assert_eq!(stats.top_reasons.len(), 5);
    assert!(stats.top_reasons.iter().all(|r| r.count == 1));
    assert!(stats.top_reasons[0].reason.contains("0.1000"));
}
