use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DRIFT_SCORE;
use crate::traits::Record;

use super::Distribution;

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A human-readable finding attached to a drift verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
    pub action: String,
}

/// Result of one drift evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftVerdict {
    pub evaluated_at: DateTime<Utc>,
    /// Wasserstein-1 distance between baseline and current, capped at 1.0.
    pub drift_score: f64,
    pub threshold_used: f64,
    /// `drift_score > threshold_used`.
    pub is_drifting: bool,
    pub baseline_distribution: Distribution,
    pub current_distribution: Distribution,
    /// Current mean confidence minus baseline mean confidence.
    pub confidence_delta: f64,
    /// Findings in rule order. Empty means fully nominal.
    pub advisories: Vec<Advisory>,
}

impl DriftVerdict {
    /// Verdict that measured nothing: zero score, empty distributions, one advisory.
    pub fn calibration(
        evaluated_at: DateTime<Utc>,
        threshold_used: f64,
        advisory: Advisory,
    ) -> Self {
        Self {
            evaluated_at,
            drift_score: 0.0,
            threshold_used,
            is_drifting: false,
            baseline_distribution: Distribution::new(),
            current_distribution: Distribution::new(),
            confidence_delta: 0.0,
            advisories: vec![advisory],
        }
    }

    pub fn is_nominal(&self) -> bool {
        self.advisories.is_empty()
    }
}

impl Record for DriftVerdict {
    const KIND: &'static str = "drift_verdict";
    const VERSION: u32 = 1;

    fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_DRIFT_SCORE).contains(&self.drift_score) {
            return Err(format!("drift_score {} is outside [0, 1]", self.drift_score));
        }
        if self.is_drifting != (self.drift_score > self.threshold_used) {
            return Err(format!(
                "is_drifting={} disagrees with score {} and threshold {}",
                self.is_drifting, self.drift_score, self.threshold_used
            ));
        }
        Ok(())
    }
}
