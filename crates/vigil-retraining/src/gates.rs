//! The retraining decision as a pure function of its inputs.
//!
//! Gate naming follows the decision, not health: a gate has "passed" when its
//! adverse condition holds. Volume is a hard AND; confidence and drift are
//! alternative triggers once volume is satisfied.

use chrono::{DateTime, Utc};

use vigil_core::config::RetrainingConfig;
use vigil_core::constants::{NO_RETRAINING_NEEDED, REASON_SEPARATOR};
use vigil_core::models::RecommendedAction;
use vigil_core::RetrainingVerdict;

/// Everything the decision looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateInputs {
    pub sample_count: usize,
    pub mean_confidence: f64,
    pub drift_score: f64,
    pub is_drifting: bool,
}

pub fn decide(
    inputs: &GateInputs,
    config: &RetrainingConfig,
    evaluated_at: DateTime<Utc>,
) -> RetrainingVerdict {
    let volume_gate_passed = inputs.sample_count >= config.min_samples;
    let confidence_gate_passed = inputs.mean_confidence < config.confidence_floor;
    let drift_gate_passed = inputs.is_drifting;
    let should_retrain = volume_gate_passed && (confidence_gate_passed || drift_gate_passed);

    let mut reasons = Vec::with_capacity(3);
    if !volume_gate_passed {
        reasons.push(format!(
            "insufficient samples: {}/{}",
            inputs.sample_count, config.min_samples
        ));
    }
    if confidence_gate_passed {
        reasons.push(format!(
            "low mean confidence: {:.4} < {}",
            inputs.mean_confidence, config.confidence_floor
        ));
    }
    if drift_gate_passed {
        reasons.push(format!("drift detected: score={:.4}", inputs.drift_score));
    }
    let reason = if reasons.is_empty() {
        NO_RETRAINING_NEEDED.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    };

    RetrainingVerdict {
        evaluated_at,
        should_retrain,
        reason,
        volume_gate_passed,
        confidence_gate_passed,
        drift_gate_passed,
        recommended_action: RecommendedAction::for_decision(should_retrain),
    }
}
