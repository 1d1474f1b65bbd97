use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Record;

use super::Distribution;

/// Point-in-time aggregate over a finite set of prediction records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// When this summary was computed.
    pub computed_at: DateTime<Utc>,
    pub total_count: usize,
    /// Label → number of records predicting it. Only observed labels appear.
    pub label_counts: BTreeMap<String, usize>,
    /// Label → share of records, in percent. Empty when `total_count == 0`.
    pub label_percentages: BTreeMap<String, f64>,
    /// Mean confidence over all records; 0.0 when empty.
    pub mean_confidence: f64,
    /// Mean confidence restricted to each label's records.
    pub mean_confidence_by_label: BTreeMap<String, f64>,
}

impl MetricsSummary {
    /// Summary of zero records.
    pub fn empty(computed_at: DateTime<Utc>) -> Self {
        Self {
            computed_at,
            total_count: 0,
            label_counts: BTreeMap::new(),
            label_percentages: BTreeMap::new(),
            mean_confidence: 0.0,
            mean_confidence_by_label: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Percentages scaled to probability mass (`pct / 100`). Not renormalized.
    pub fn distribution(&self) -> Distribution {
        self.label_percentages
            .iter()
            .map(|(label, pct)| (label.clone(), pct / 100.0))
            .collect()
    }
}

impl Record for MetricsSummary {
    const KIND: &'static str = "metrics_summary";
    const VERSION: u32 = 1;

    fn validate(&self) -> Result<(), String> {
        let counted: usize = self.label_counts.values().sum();
        if counted != self.total_count {
            return Err(format!(
                "label counts sum to {counted}, total_count is {}",
                self.total_count
            ));
        }
        if !self.label_percentages.keys().eq(self.label_counts.keys()) {
            return Err("label_percentages and label_counts cover different labels".into());
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
