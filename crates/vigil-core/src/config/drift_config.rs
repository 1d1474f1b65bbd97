use serde::{Deserialize, Serialize};

use super::defaults;

/// Drift engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Score above which the distribution is considered drifting.
    pub threshold: f64,
    /// Absolute mean-confidence change that produces an advisory.
    pub confidence_shift_advisory: f64,
    /// Mean-confidence drop that escalates to a retraining advisory.
    pub confidence_drop_escalation: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_DRIFT_THRESHOLD,
            confidence_shift_advisory: defaults::DEFAULT_CONFIDENCE_SHIFT_ADVISORY,
            confidence_drop_escalation: defaults::DEFAULT_CONFIDENCE_DROP_ESCALATION,
        }
    }
}

impl DriftConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}
