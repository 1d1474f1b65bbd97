use vigil_core::traits::IEventSink;
use vigil_core::MonitorEvent;

use crate::tracing_setup::events;

/// Event sink that writes every monitor event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl IEventSink for TracingSink {
    fn emit(&self, event: &MonitorEvent) {
        match event {
            MonitorEvent::RecordAppended { store } => events::record_appended(store),
            MonitorEvent::PredictionLogged { label, confidence } => {
                events::prediction_logged(label, *confidence)
            }
            MonitorEvent::StoreCleared { store } => events::store_cleared(store),
            MonitorEvent::DecodeRejected {
                store,
                line,
                reason,
            } => events::decode_rejected(store, *line, reason),
            MonitorEvent::MetricsSnapshotSaved { total_count } => {
                events::metrics_snapshot_saved(*total_count)
            }
            MonitorEvent::BaselineCaptured {
                sample_count,
                labels,
            } => events::baseline_captured(*sample_count, *labels),
            MonitorEvent::BaselineBootstrapped { sample_count } => {
                events::baseline_bootstrapped(*sample_count)
            }
            MonitorEvent::DriftEvaluated {
                drift_score,
                threshold,
                is_drifting,
                advisories,
            } => events::drift_evaluated(*drift_score, *threshold, *is_drifting, *advisories),
            MonitorEvent::RetrainingEvaluated {
                should_retrain,
                reason,
            } => events::retraining_evaluated(*should_retrain, reason),
        }
    }
}
