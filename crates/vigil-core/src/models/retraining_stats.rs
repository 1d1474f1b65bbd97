use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often one reason string triggered retraining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Aggregate view over a retraining verdict history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrainingStats {
    pub total_evaluations: usize,
    pub triggered_count: usize,
    /// `triggered_count / total_evaluations`, 0.0 for an empty history.
    pub trigger_rate: f64,
    /// Timestamp of the most recent triggered verdict.
    pub last_triggered_at: Option<DateTime<Utc>>,
    /// Most frequent triggered reasons, highest count first.
    pub top_reasons: Vec<ReasonCount>,
}
