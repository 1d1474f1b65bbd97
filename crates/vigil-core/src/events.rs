//! Structured events emitted by the engines through an [`IEventSink`](crate::traits::IEventSink).

use serde::{Deserialize, Serialize};

/// Every observable thing the monitor does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MonitorEvent {
    RecordAppended {
        store: String,
    },
    PredictionLogged {
        label: String,
        confidence: f64,
    },
    StoreCleared {
        store: String,
    },
    DecodeRejected {
        store: String,
        line: usize,
        reason: String,
    },
    MetricsSnapshotSaved {
        total_count: usize,
    },
    BaselineCaptured {
        sample_count: usize,
        labels: usize,
    },
    BaselineBootstrapped {
        sample_count: usize,
    },
    DriftEvaluated {
        drift_score: f64,
        threshold: f64,
        is_drifting: bool,
        advisories: usize,
    },
    RetrainingEvaluated {
        should_retrain: bool,
        reason: String,
    },
}

impl MonitorEvent {
    /// Stable snake_case name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RecordAppended { .. } => "record_appended",
            Self::PredictionLogged { .. } => "prediction_logged",
            Self::StoreCleared { .. } => "store_cleared",
            Self::DecodeRejected { .. } => "decode_rejected",
            Self::MetricsSnapshotSaved { .. } => "metrics_snapshot_saved",
            Self::BaselineCaptured { .. } => "baseline_captured",
            Self::BaselineBootstrapped { .. } => "baseline_bootstrapped",
            Self::DriftEvaluated { .. } => "drift_evaluated",
            Self::RetrainingEvaluated { .. } => "retraining_evaluated",
        }
    }

    /// Whether the event signals something an operator should look at.
    pub fn is_warning(&self) -> bool {
        match self {
            Self::DecodeRejected { .. } => true,
            Self::DriftEvaluated { is_drifting, .. } => *is_drifting,
            Self::RetrainingEvaluated { should_retrain, .. } => *should_retrain,
            _ => false,
        }
    }
}
