//! Value types that flow between the engines. All are immutable once built.

mod baseline;
mod drift_verdict;
mod metrics_summary;
mod prediction_record;
mod retraining_stats;
mod retraining_verdict;

pub use baseline::BaselineDistribution;
pub use drift_verdict::{Advisory, DriftVerdict, Severity};
pub use metrics_summary::MetricsSummary;
pub use prediction_record::PredictionRecord;
pub use retraining_stats::{ReasonCount, RetrainingStats};
pub use retraining_verdict::{RecommendedAction, RetrainingVerdict};

use std::collections::BTreeMap;

/// Label → probability mass.
pub type Distribution = BTreeMap<String, f64>;

fn check_mass(field: &str, label: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{field}[{label}] = {value} is outside [0, 1]"))
    }
}
