use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Record;

/// What the operator should do next. Maps 1:1 from `should_retrain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    Retrain,
    ContinueMonitoring,
}

impl RecommendedAction {
    pub fn for_decision(should_retrain: bool) -> Self {
        if should_retrain {
            Self::Retrain
        } else {
            Self::ContinueMonitoring
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Retrain => "RETRAIN",
            Self::ContinueMonitoring => "CONTINUE_MONITORING",
        }
    }
}

/// Result of one retraining evaluation.
///
/// A gate "passed" when its adverse condition holds: the confidence gate
/// passes on *low* confidence, the drift gate on detected drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrainingVerdict {
    pub evaluated_at: DateTime<Utc>,
    pub should_retrain: bool,
    /// Adverse gates joined with `" | "`, or the no-action sentinel.
    pub reason: String,
    pub volume_gate_passed: bool,
    pub confidence_gate_passed: bool,
    pub drift_gate_passed: bool,
    pub recommended_action: RecommendedAction,
}

impl Record for RetrainingVerdict {
    const KIND: &'static str = "retraining_verdict";
    const VERSION: u32 = 1;

    fn validate(&self) -> Result<(), String> {
        let expected = self.volume_gate_passed
            && (self.confidence_gate_passed || self.drift_gate_passed);
        if self.should_retrain != expected {
            return Err(format!(
                "should_retrain={} disagrees with gates (volume={}, confidence={}, drift={})",
                self.should_retrain,
                self.volume_gate_passed,
                self.confidence_gate_passed,
                self.drift_gate_passed
            ));
        }
        if self.recommended_action != RecommendedAction::for_decision(self.should_retrain) {
            return Err(format!(
                "recommended_action {} disagrees with should_retrain={}",
                self.recommended_action.label(),
                self.should_retrain
            ));
        }
        if self.reason.is_empty() {
            return Err("reason must not be empty".into());
        }
        Ok(())
    }
}
