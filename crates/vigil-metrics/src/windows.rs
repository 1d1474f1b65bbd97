//! Fixed-width, non-overlapping windows anchored at the earliest record.
//!
//! Window `k` covers `[first + k*width, first + (k+1)*width)`. Windows with no
//! records are omitted; the last window is emitted even when partial.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::{MetricsSummary, PredictionRecord};

use crate::summary::summarize_at;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Summary of the records falling in one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedSummary {
    pub window_start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub window_end: DateTime<Utc>,
    pub summary: MetricsSummary,
}

/// Partition `records` by timestamp into windows of `width` and summarize each.
///
/// Input order does not matter; records are sorted (stably) by timestamp first.
pub fn summarize_windowed(
    records: &[PredictionRecord],
    width: Duration,
) -> VigilResult<Vec<WindowedSummary>> {
    let width_ns = total_nanos(width);
    if width_ns <= 0 {
        return Err(VigilError::InvalidWindow {
            reason: format!("window width must be positive, got {width}"),
        });
    }

    let mut sorted: Vec<&PredictionRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    let Some(first) = sorted.first().map(|r| r.timestamp) else {
        return Ok(Vec::new());
    };

    let computed_at = Utc::now();
    let mut windows = Vec::new();
    let mut start = 0usize;
    while start < sorted.len() {
        let index = total_nanos(sorted[start].timestamp - first) / width_ns;
        let end = start
            + sorted[start..]
                .iter()
                .take_while(|r| total_nanos(r.timestamp - first) / width_ns == index)
                .count();

        let window_start = first + from_nanos(index * width_ns);
        windows.push(WindowedSummary {
            window_start,
            window_end: window_start + width,
            summary: summarize_at(sorted[start..end].iter().copied(), computed_at),
        });
        start = end;
    }
    Ok(windows)
}

fn total_nanos(d: Duration) -> i128 {
    d.num_seconds() as i128 * NANOS_PER_SEC + d.subsec_nanos() as i128
}

fn from_nanos(ns: i128) -> Duration {
    Duration::seconds((ns / NANOS_PER_SEC) as i64) + Duration::nanoseconds((ns % NANOS_PER_SEC) as i64)
}
