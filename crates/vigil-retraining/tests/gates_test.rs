//! Retraining gates: golden decisions and the volume gate property.

use chrono::Utc;
use proptest::prelude::*;
use test_fixtures::retraining_scenarios;
use vigil_core::config::RetrainingConfig;
use vigil_core::constants::NO_RETRAINING_NEEDED;
use vigil_core::models::RecommendedAction;
use vigil_retraining::{decide, GateInputs};

#[test]
fn golden_scenarios() {
    for s in retraining_scenarios() {
        let config = RetrainingConfig {
            min_samples: s.min_samples,
            confidence_floor: s.confidence_floor,
            ..RetrainingConfig::default()
        };
        let inputs = GateInputs {
            sample_count: s.sample_count,
            mean_confidence: s.mean_confidence,
            drift_score: if s.is_drifting { 0.5 } else { 0.0 },
            is_drifting: s.is_drifting,
        };
        let verdict = decide(&inputs, &config, Utc::now());

        assert_eq!(verdict.should_retrain, s.expected_retrain, "{}", s.name);
        for fragment in &s.expected_reason_fragments {
            assert!(
                verdict.reason.contains(fragment.as_str()),
                "{}: reason {:?} lacks {:?}",
                s.name,
                verdict.reason,
                fragment
            );
        }
        assert_eq!(
            verdict.recommended_action,
            RecommendedAction::for_decision(s.expected_retrain)
        );
    }
}

#[test]
fn sentinel_only_when_no_gate_is_adverse() {
    let config = RetrainingConfig::default();
    let healthy = GateInputs {
        sample_count: 500,
        mean_confidence: 0.95,
        drift_score: 0.01,
        is_drifting: false,
    };
    let verdict = decide(&healthy, &config, Utc::now());
    assert_eq!(verdict.reason, NO_RETRAINING_NEEDED);
    assert!(verdict.volume_gate_passed);
    assert!(!verdict.confidence_gate_passed);
    assert!(!verdict.drift_gate_passed);
}

#[test]
fn recommended_action_serializes_as_fixed_strings() {
    let config = RetrainingConfig::default();
    let trigger = GateInputs {
        sample_count: 100,
        mean_confidence: 0.2,
        drift_score: 0.0,
        is_drifting: false,
    };
    let verdict = decide(&trigger, &config, Utc::now());
    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["recommended_action"], "RETRAIN");
}

proptest! {
    #[test]
    fn prop_volume_gate_blocks_below_min_samples(
        min_samples in 1usize..1000,
        shortfall in 1usize..1000,
        mean_confidence in 0.0f64..1.0,
        is_drifting in any::<bool>(),
    ) {
        let config = RetrainingConfig { min_samples, ..RetrainingConfig::default() };
        let inputs = GateInputs {
            sample_count: min_samples.saturating_sub(shortfall),
            mean_confidence,
            drift_score: if is_drifting { 1.0 } else { 0.0 },
            is_drifting,
        };
        let verdict = decide(&inputs, &config, Utc::now());
        prop_assert!(!verdict.should_retrain);
        prop_assert!(verdict.reason.contains("insufficient samples"));
    }

    #[test]
    fn prop_decision_matches_gate_formula(
        sample_count in 0usize..300,
        mean_confidence in 0.0f64..1.0,
        is_drifting in any::<bool>(),
    ) {
        let config = RetrainingConfig::default();
        let inputs = GateInputs { sample_count, mean_confidence, drift_score: 0.3, is_drifting };
        let v = decide(&inputs, &config, Utc::now());
        prop_assert_eq!(
            v.should_retrain,
            v.volume_gate_passed && (v.confidence_gate_passed || v.drift_gate_passed)
        );
    }
}
