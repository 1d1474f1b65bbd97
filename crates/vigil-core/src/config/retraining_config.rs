use serde::{Deserialize, Serialize};

use super::defaults;

/// Retraining decision configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrainingConfig {
    /// Volume gate: minimum records before any other signal counts.
    pub min_samples: usize,
    /// Mean confidence strictly below this passes the confidence gate.
    pub confidence_floor: f64,
    /// How many reasons `aggregate_stats` reports.
    pub top_reasons: usize,
}

impl Default for RetrainingConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            top_reasons: defaults::DEFAULT_TOP_REASONS,
        }
    }
}
