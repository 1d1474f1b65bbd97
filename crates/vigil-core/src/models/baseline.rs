use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Record;

use super::{check_mass, Distribution, MetricsSummary};

/// The single reference distribution drift is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineDistribution {
    pub captured_at: DateTime<Utc>,
    /// Label → probability mass at capture time.
    pub distribution: Distribution,
    pub sample_count: usize,
    pub mean_confidence: f64,
}

impl BaselineDistribution {
    /// Derive a baseline from a summary.
    pub fn from_summary(summary: &MetricsSummary, captured_at: DateTime<Utc>) -> Self {
        Self {
            captured_at,
            distribution: summary.distribution(),
            sample_count: summary.total_count,
            mean_confidence: summary.mean_confidence,
        }
    }
}

impl Record for BaselineDistribution {
    const KIND: &'static str = "baseline";
    const VERSION: u32 = 1;

    fn validate(&self) -> Result<(), String> {
        for (label, &mass) in &self.distribution {
            check_mass("distribution", label, mass)?;
        }
        if !self.mean_confidence.is_finite() || !(0.0..=1.0).contains(&self.mean_confidence) {
            return Err(format!(
                "mean_confidence {} is outside [0, 1]",
                self.mean_confidence
            ));
        }
        Ok(())
    }
}
