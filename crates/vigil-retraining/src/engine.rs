//! RetrainingEngine: evaluates the gates over a record set and keeps the
//! decision history.

use std::sync::Arc;

use chrono::Utc;

use vigil_core::config::RetrainingConfig;
use vigil_core::errors::VigilResult;
use vigil_core::models::RetrainingStats;
use vigil_core::traits::{IEventSink, IRecordLog, ISnapshotStore};
use vigil_core::{BaselineDistribution, DriftVerdict, MonitorEvent, PredictionRecord, RetrainingVerdict};
use vigil_drift::DriftEngine;
use vigil_metrics::summarize_at;

use crate::gates::{decide, GateInputs};
use crate::stats::aggregate_stats;

/// Retraining engine sharing a drift engine with its owner.
pub struct RetrainingEngine<B, H, R>
where
    B: ISnapshotStore<BaselineDistribution>,
    H: IRecordLog<DriftVerdict>,
    R: IRecordLog<RetrainingVerdict>,
{
    drift: Arc<DriftEngine<B, H>>,
    history: R,
    config: RetrainingConfig,
    sink: Arc<dyn IEventSink>,
}

impl<B, H, R> RetrainingEngine<B, H, R>
where
    B: ISnapshotStore<BaselineDistribution>,
    H: IRecordLog<DriftVerdict>,
    R: IRecordLog<RetrainingVerdict>,
{
    pub fn new(
        drift: Arc<DriftEngine<B, H>>,
        history: R,
        config: RetrainingConfig,
        sink: Arc<dyn IEventSink>,
    ) -> Self {
        Self {
            drift,
            history,
            config,
            sink,
        }
    }

    pub fn config(&self) -> &RetrainingConfig {
        &self.config
    }

    /// Decide whether `records` call for retraining. Nothing is recorded.
    ///
    /// Drift is obtained from the shared drift engine, so the first call
    /// without a baseline captures one and reports no drift.
    pub fn evaluate(&self, records: &[PredictionRecord]) -> VigilResult<RetrainingVerdict> {
        let now = Utc::now();
        let summary = summarize_at(records, now);
        let drift = self.drift.evaluate(records)?;
        let drift = drift.verdict();

        let verdict = decide(
            &GateInputs {
                sample_count: records.len(),
                mean_confidence: summary.mean_confidence,
                drift_score: drift.drift_score,
                is_drifting: drift.is_drifting,
            },
            &self.config,
            now,
        );
        self.sink.emit(&MonitorEvent::RetrainingEvaluated {
            should_retrain: verdict.should_retrain,
            reason: verdict.reason.clone(),
        });
        Ok(verdict)
    }

    pub fn record(&self, verdict: &RetrainingVerdict) -> VigilResult<()> {
        self.history.append(verdict)
    }

    pub fn evaluate_and_record(
        &self,
        records: &[PredictionRecord],
    ) -> VigilResult<RetrainingVerdict> {
        let verdict = self.evaluate(records)?;
        self.record(&verdict)?;
        Ok(verdict)
    }

    pub fn history(&self) -> VigilResult<Vec<RetrainingVerdict>> {
        self.history.load_all()
    }

    pub fn clear_history(&self) -> VigilResult<()> {
        self.history.clear()
    }

    /// Most recently recorded verdict that triggered retraining.
    pub fn last_triggered(&self) -> VigilResult<Option<RetrainingVerdict>> {
        Ok(self
            .history()?
            .into_iter()
            .rev()
            .find(|v| v.should_retrain))
    }

    pub fn statistics(&self) -> VigilResult<RetrainingStats> {
        Ok(aggregate_stats(&self.history()?, self.config.top_reasons))
    }
}
