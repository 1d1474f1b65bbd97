//! [`MonitorEngine`]: owns the prediction log and every engine built on it.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::models::RetrainingStats;
use vigil_core::traits::{IEventSink, IRecordLog};
use vigil_core::{
    BaselineDistribution, DriftVerdict, MetricsSummary, MonitorEvent, PredictionRecord,
    RetrainingVerdict, VigilConfig,
};
use vigil_drift::{DriftEngine, DriftOutcome};
use vigil_metrics::{MetricsTracker, WindowedSummary};
use vigil_retraining::RetrainingEngine;
use vigil_storage::{JsonSnapshot, JsonlLog};

pub type FileDriftEngine = DriftEngine<JsonSnapshot<BaselineDistribution>, JsonlLog<DriftVerdict>>;
pub type FileRetrainingEngine = RetrainingEngine<
    JsonSnapshot<BaselineDistribution>,
    JsonlLog<DriftVerdict>,
    JsonlLog<RetrainingVerdict>,
>;

/// Central monitor wiring the file-backed stores to the engines.
///
/// Every evaluation reads the full prediction log; the caller decides when
/// to evaluate. Appends to one data directory must come from a single writer.
pub struct MonitorEngine {
    config: VigilConfig,
    sink: Arc<dyn IEventSink>,
    predictions: JsonlLog<PredictionRecord>,
    metrics: MetricsTracker<JsonlLog<MetricsSummary>>,
    drift: Arc<FileDriftEngine>,
    retraining: FileRetrainingEngine,
}

impl MonitorEngine {
    /// Validate `config`, create the data directory, and open every store.
    pub fn open(config: VigilConfig, sink: Arc<dyn IEventSink>) -> VigilResult<Self> {
        config.validate()?;
        let storage = &config.storage;
        let data_dir = PathBuf::from(&storage.data_dir);
        fs::create_dir_all(&data_dir).map_err(|e| StorageError::unavailable(&data_dir, &e))?;

        let predictions: JsonlLog<PredictionRecord> =
            Self::log(&config, &storage.predictions_file, &sink)?;
        let metrics: MetricsTracker<JsonlLog<MetricsSummary>> = MetricsTracker::new(
            Self::log(&config, &storage.metrics_file, &sink)?,
            sink.clone(),
        );
        let drift: Arc<FileDriftEngine> = Arc::new(DriftEngine::new(
            JsonSnapshot::open(storage.path_of(&storage.baseline_file))?,
            Self::log(&config, &storage.drift_history_file, &sink)?,
            config.drift.clone(),
            sink.clone(),
        ));
        let retraining: FileRetrainingEngine = RetrainingEngine::new(
            drift.clone(),
            Self::log(&config, &storage.retraining_history_file, &sink)?,
            config.retraining.clone(),
            sink.clone(),
        );

        tracing::debug!(data_dir = %data_dir.display(), "monitor opened");
        Ok(Self {
            config,
            sink,
            predictions,
            metrics,
            drift,
            retraining,
        })
    }

    fn log<T: vigil_core::traits::Record>(
        config: &VigilConfig,
        file_name: &str,
        sink: &Arc<dyn IEventSink>,
    ) -> VigilResult<JsonlLog<T>> {
        Ok(JsonlLog::open(config.storage.path_of(file_name))?
            .with_mode(config.storage.decode_mode)
            .with_sink(sink.clone()))
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    pub fn drift(&self) -> &FileDriftEngine {
        &self.drift
    }

    pub fn retraining(&self) -> &FileRetrainingEngine {
        &self.retraining
    }

    // ── Predictions ─────────────────────────────────────────────────────────

    /// Build a record from raw model scores and append it.
    pub fn log_prediction(
        &self,
        input_text: impl Into<String>,
        scores: BTreeMap<String, f64>,
    ) -> VigilResult<PredictionRecord> {
        let record = PredictionRecord::from_scores(input_text, scores)?;
        self.append_prediction(&record)?;
        Ok(record)
    }

    /// Append an already-built record.
    pub fn append_prediction(&self, record: &PredictionRecord) -> VigilResult<()> {
        self.predictions.append(record)?;
        self.sink.emit(&MonitorEvent::PredictionLogged {
            label: record.predicted_label.clone(),
            confidence: record.confidence,
        });
        Ok(())
    }

    pub fn predictions(&self) -> VigilResult<Vec<PredictionRecord>> {
        self.predictions.load_all()
    }

    pub fn prediction_count(&self) -> VigilResult<usize> {
        self.predictions.count()
    }

    // ── Metrics ─────────────────────────────────────────────────────────────

    pub fn summary(&self) -> VigilResult<MetricsSummary> {
        let records = self.predictions()?;
        let _span = vigil_observability::summary_span!(records.len()).entered();
        Ok(self.metrics.summarize(&records))
    }

    /// Summaries per `metrics.window_hours` window, empty windows omitted.
    pub fn summary_windows(&self) -> VigilResult<Vec<WindowedSummary>> {
        let records = self.predictions()?;
        let _span = vigil_observability::summary_span!(records.len()).entered();
        self.metrics.windows(&records, self.config.metrics.window()?)
    }

    /// Summarize the current predictions and append the result to the metrics history.
    pub fn save_summary(&self) -> VigilResult<MetricsSummary> {
        let summary = self.summary()?;
        self.metrics.save(&summary)?;
        Ok(summary)
    }

    pub fn metrics_history(&self) -> VigilResult<Vec<MetricsSummary>> {
        self.metrics.history()
    }

    // ── Drift ───────────────────────────────────────────────────────────────

    /// Capture the current predictions as the drift baseline.
    pub fn set_baseline(&self) -> VigilResult<BaselineDistribution> {
        let records = self.predictions()?;
        let _span = vigil_observability::baseline_span!(records.len()).entered();
        self.drift.set_baseline(&records)
    }

    pub fn baseline(&self) -> VigilResult<Option<BaselineDistribution>> {
        self.drift.baseline()
    }

    /// Evaluate drift over the current predictions and append the verdict to
    /// the drift history, whatever the outcome.
    pub fn check_drift(&self) -> VigilResult<DriftOutcome> {
        let records = self.predictions()?;
        let _span =
            vigil_observability::drift_span!(records.len(), self.config.drift.threshold).entered();
        let outcome = self.drift.evaluate(&records)?;
        self.drift.append_history(outcome.verdict())?;
        Ok(outcome)
    }

    pub fn drift_history(&self) -> VigilResult<Vec<DriftVerdict>> {
        self.drift.read_history()
    }

    // ── Retraining ──────────────────────────────────────────────────────────

    /// Evaluate the retraining gates over the current predictions and record the verdict.
    pub fn evaluate_retraining(&self) -> VigilResult<RetrainingVerdict> {
        let records = self.predictions()?;
        let _span = vigil_observability::retraining_span!(
            records.len(),
            self.config.retraining.min_samples
        )
        .entered();
        self.retraining.evaluate_and_record(&records)
    }

    pub fn retraining_history(&self) -> VigilResult<Vec<RetrainingVerdict>> {
        self.retraining.history()
    }

    pub fn last_triggered(&self) -> VigilResult<Option<RetrainingVerdict>> {
        self.retraining.last_triggered()
    }

    pub fn statistics(&self) -> VigilResult<RetrainingStats> {
        self.retraining.statistics()
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Clear every log and the baseline.
    pub fn reset(&self) -> VigilResult<()> {
        self.predictions.clear()?;
        self.metrics.clear()?;
        self.drift.clear_history()?;
        self.drift.clear_baseline()?;
        self.retraining.clear_history()
    }
}
