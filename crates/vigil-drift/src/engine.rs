//! DriftEngine: owns the baseline snapshot and the drift history log.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};

use vigil_core::config::DriftConfig;
use vigil_core::errors::VigilResult;
use vigil_core::traits::{IEventSink, IRecordLog, ISnapshotStore};
use vigil_core::{BaselineDistribution, DriftVerdict, MetricsSummary, MonitorEvent, PredictionRecord};
use vigil_metrics::summarize_at;

use crate::advisories;
use crate::distance::wasserstein;
use crate::outcome::DriftOutcome;

/// Drift engine generic over its baseline snapshot and history log.
pub struct DriftEngine<B, H>
where
    B: ISnapshotStore<BaselineDistribution>,
    H: IRecordLog<DriftVerdict>,
{
    baseline: B,
    history: H,
    config: DriftConfig,
    sink: Arc<dyn IEventSink>,
    /// Held across every baseline read-then-write so a bootstrap never races
    /// an explicit `set_baseline` within this process.
    baseline_guard: Mutex<()>,
}

impl<B, H> DriftEngine<B, H>
where
    B: ISnapshotStore<BaselineDistribution>,
    H: IRecordLog<DriftVerdict>,
{
    pub fn new(baseline: B, history: H, config: DriftConfig, sink: Arc<dyn IEventSink>) -> Self {
        Self {
            baseline,
            history,
            config,
            sink,
            baseline_guard: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Capture `records` as the new baseline, replacing any existing one.
    ///
    /// An empty slice still writes a baseline, with an empty distribution.
    pub fn set_baseline(&self, records: &[PredictionRecord]) -> VigilResult<BaselineDistribution> {
        let _guard = self.baseline_guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.capture(records, Utc::now())
    }

    /// The persisted baseline, if one has been captured.
    pub fn baseline(&self) -> VigilResult<Option<BaselineDistribution>> {
        self.baseline.read()
    }

    pub fn clear_baseline(&self) -> VigilResult<()> {
        let _guard = self.baseline_guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.baseline.clear()
    }

    /// Compare `records` against the baseline, capturing one first if none exists.
    pub fn evaluate(&self, records: &[PredictionRecord]) -> VigilResult<DriftOutcome> {
        let now = Utc::now();
        let baseline = {
            let _guard = self.baseline_guard.lock().unwrap_or_else(PoisonError::into_inner);
            match self.baseline.read()? {
                Some(baseline) => baseline,
                None if records.is_empty() => {
                    return Ok(DriftOutcome::Uncalibrated(DriftVerdict::calibration(
                        now,
                        self.config.threshold,
                        advisories::insufficient_data(),
                    )));
                }
                None => {
                    let captured = self.capture(records, now)?;
                    self.sink.emit(&MonitorEvent::BaselineBootstrapped {
                        sample_count: captured.sample_count,
                    });
                    return Ok(DriftOutcome::Bootstrapped(DriftVerdict::calibration(
                        now,
                        self.config.threshold,
                        advisories::baseline_created(captured.sample_count),
                    )));
                }
            }
        };

        let current = summarize_at(records, now);
        let verdict = self.compare(&baseline, &current, now);
        self.sink.emit(&MonitorEvent::DriftEvaluated {
            drift_score: verdict.drift_score,
            threshold: verdict.threshold_used,
            is_drifting: verdict.is_drifting,
            advisories: verdict.advisories.len(),
        });
        Ok(DriftOutcome::Evaluated(verdict))
    }

    /// Pure comparison of a baseline against a current summary.
    pub fn compare(
        &self,
        baseline: &BaselineDistribution,
        current: &MetricsSummary,
        evaluated_at: DateTime<Utc>,
    ) -> DriftVerdict {
        let current_distribution = current.distribution();
        let drift_score = wasserstein(&baseline.distribution, &current_distribution);
        let is_drifting = drift_score > self.config.threshold;
        let confidence_delta = current.mean_confidence - baseline.mean_confidence;

        DriftVerdict {
            evaluated_at,
            drift_score,
            threshold_used: self.config.threshold,
            is_drifting,
            baseline_distribution: baseline.distribution.clone(),
            current_distribution,
            confidence_delta,
            advisories: advisories::generate(
                drift_score,
                is_drifting,
                confidence_delta,
                &self.config,
            ),
        }
    }

    pub fn append_history(&self, verdict: &DriftVerdict) -> VigilResult<()> {
        self.history.append(verdict)
    }

    /// Every recorded verdict, oldest first.
    pub fn read_history(&self) -> VigilResult<Vec<DriftVerdict>> {
        self.history.load_all()
    }

    pub fn clear_history(&self) -> VigilResult<()> {
        self.history.clear()
    }

    // Caller holds `baseline_guard`.
    fn capture(
        &self,
        records: &[PredictionRecord],
        captured_at: DateTime<Utc>,
    ) -> VigilResult<BaselineDistribution> {
        let summary = summarize_at(records, captured_at);
        let baseline = BaselineDistribution::from_summary(&summary, captured_at);
        self.baseline.write(&baseline)?;
        self.sink.emit(&MonitorEvent::BaselineCaptured {
            sample_count: baseline.sample_count,
            labels: baseline.distribution.len(),
        });
        Ok(baseline)
    }
}
