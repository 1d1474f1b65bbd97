//! Persisted history of metrics summaries.

use std::sync::Arc;

use chrono::Duration;

use vigil_core::errors::VigilResult;
use vigil_core::traits::{IEventSink, IRecordLog};
use vigil_core::{MetricsSummary, MonitorEvent, PredictionRecord};

use crate::windows::{summarize_windowed, WindowedSummary};

/// Computes summaries and appends the ones worth keeping to a log.
pub struct MetricsTracker<L: IRecordLog<MetricsSummary>> {
    history: L,
    sink: Arc<dyn IEventSink>,
}

impl<L: IRecordLog<MetricsSummary>> MetricsTracker<L> {
    pub fn new(history: L, sink: Arc<dyn IEventSink>) -> Self {
        Self { history, sink }
    }

    pub fn summarize(&self, records: &[PredictionRecord]) -> MetricsSummary {
        crate::summary::summarize(records)
    }

    pub fn windows(
        &self,
        records: &[PredictionRecord],
        width: Duration,
    ) -> VigilResult<Vec<WindowedSummary>> {
        summarize_windowed(records, width)
    }

    /// Append `summary` to the history.
    pub fn save(&self, summary: &MetricsSummary) -> VigilResult<()> {
        self.history.append(summary)?;
        self.sink.emit(&MonitorEvent::MetricsSnapshotSaved {
            total_count: summary.total_count,
        });
        Ok(())
    }

    /// Every saved summary, oldest first.
    pub fn history(&self) -> VigilResult<Vec<MetricsSummary>> {
        self.history.load_all()
    }

    pub fn clear(&self) -> VigilResult<()> {
        self.history.clear()
    }
}
