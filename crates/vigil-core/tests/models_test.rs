use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use vigil_core::models::*;
use vigil_core::traits::Record;
use vigil_core::MonitorEvent;

fn summary(counts: &[(&str, usize)], mean: f64) -> MetricsSummary {
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    MetricsSummary {
        computed_at: Utc::now(),
        total_count: total,
        label_counts: counts.iter().map(|(k, c)| (k.to_string(), *c)).collect(),
        label_percentages: counts
            .iter()
            .map(|(k, c)| (k.to_string(), *c as f64 / total as f64 * 100.0))
            .collect(),
        mean_confidence: mean,
        mean_confidence_by_label: BTreeMap::new(),
    }
}

#[test]
fn summary_distribution_scales_percentages() {
    let s = summary(&[("neg", 1), ("pos", 3)], 0.8);
    let dist = s.distribution();
    assert!((dist["neg"] - 0.25).abs() < 1e-12);
    assert!((dist["pos"] - 0.75).abs() < 1e-12);
    assert!(s.validate().is_ok());
}

#[test]
fn summary_with_inconsistent_counts_is_invalid() {
    let mut s = summary(&[("a", 2)], 0.5);
    s.total_count = 3;
    assert!(s.validate().is_err());
}

#[test]
fn baseline_copies_summary_fields() {
    let s = summary(&[("a", 1), ("b", 1)], 0.6);
    let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let b = BaselineDistribution::from_summary(&s, at);
    assert_eq!(b.captured_at, at);
    assert_eq!(b.sample_count, 2);
    assert_eq!(b.mean_confidence, 0.6);
    assert_eq!(b.distribution.len(), 2);
    assert!(b.validate().is_ok());
}

#[test]
fn empty_summary_yields_empty_baseline() {
    let b = BaselineDistribution::from_summary(&MetricsSummary::empty(Utc::now()), Utc::now());
    assert!(b.distribution.is_empty());
    assert_eq!(b.sample_count, 0);
}

#[test]
fn drift_verdict_validation_checks_threshold_agreement() {
    let mut v = DriftVerdict::calibration(
        Utc::now(),
        0.15,
        Advisory {
            severity: Severity::Info,
            message: "baseline created".into(),
            action: "none".into(),
        },
    );
    assert!(v.validate().is_ok());
    assert!(!v.is_nominal());
    v.drift_score = 0.5;
    assert!(v.validate().is_err());
    v.is_drifting = true;
    assert!(v.validate().is_ok());
}

#[test]
fn recommended_action_maps_from_decision() {
    assert_eq!(RecommendedAction::for_decision(true), RecommendedAction::Retrain);
    assert_eq!(
        RecommendedAction::for_decision(false).label(),
        "CONTINUE_MONITORING"
    );
    let json = serde_json::to_string(&RecommendedAction::Retrain).unwrap();
    assert_eq!(json, "\"RETRAIN\"");
}

#[test]
fn retraining_verdict_validation_checks_gate_logic() {
    let mut v = RetrainingVerdict {
        evaluated_at: Utc::now(),
        should_retrain: true,
        reason: "low mean confidence".into(),
        volume_gate_passed: true,
        confidence_gate_passed: true,
        drift_gate_passed: false,
        recommended_action: RecommendedAction::Retrain,
    };
    assert!(v.validate().is_ok());
    v.volume_gate_passed = false;
    assert!(v.validate().is_err());
}

#[test]
fn severity_orders_by_urgency() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Critical);
}

#[test]
fn monitor_event_serializes_with_tag() {
    let ev = MonitorEvent::BaselineBootstrapped { sample_count: 12 };
    let json = serde_json::to_value(&ev).unwrap();
    assert_eq!(json["event"], "baseline_bootstrapped");
    assert_eq!(ev.name(), "baseline_bootstrapped");
    assert!(!ev.is_warning());
}
