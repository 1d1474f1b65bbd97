//! Shared test support for the vigil workspace: record builders, a recording
//! event sink, and loaders for the golden JSON scenarios under `data/`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use vigil_core::traits::IEventSink;
use vigil_core::{MonitorEvent, PredictionRecord};

// ── Fixture files ────────────────────────────────────────────────────────────

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// One golden drift comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct DriftScenario {
    pub name: String,
    pub baseline: BTreeMap<String, f64>,
    pub current: BTreeMap<String, f64>,
    pub expected_score: f64,
}

/// One golden retraining decision.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrainingScenario {
    pub name: String,
    pub min_samples: usize,
    pub confidence_floor: f64,
    pub sample_count: usize,
    pub mean_confidence: f64,
    pub is_drifting: bool,
    pub expected_retrain: bool,
    pub expected_reason_fragments: Vec<String>,
}

pub fn drift_scenarios() -> Vec<DriftScenario> {
    load_fixture("drift/scenarios.json")
}

pub fn retraining_scenarios() -> Vec<RetrainingScenario> {
    load_fixture("retraining/scenarios.json")
}

// ── Record builders ──────────────────────────────────────────────────────────

/// Fixed reference instant so windowing tests are deterministic.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Scores where `label` wins with exactly `confidence`.
///
/// The remaining mass is split evenly across `~other<N>` filler labels, which
/// sort after any alphanumeric label so ties still resolve to `label`.
pub fn scores_for(label: &str, confidence: f64) -> BTreeMap<String, f64> {
    assert!(
        confidence > 0.0 && confidence <= 1.0,
        "fixture confidence must be in (0, 1]"
    );
    let mut scores = BTreeMap::new();
    scores.insert(label.to_string(), confidence);

    let rest = 1.0 - confidence;
    if rest > 1e-12 {
        let fillers = (rest / confidence - 1e-9).ceil().max(1.0) as usize;
        let share = rest / fillers as f64;
        for i in 0..fillers {
            scores.insert(format!("~other{i}"), share);
        }
    }
    scores
}

/// A record predicting `label` with `confidence` at `t0()`.
pub fn record(label: &str, confidence: f64) -> PredictionRecord {
    record_at(label, confidence, t0())
}

/// A record predicting `label` with `confidence` at `timestamp`.
pub fn record_at(label: &str, confidence: f64, timestamp: DateTime<Utc>) -> PredictionRecord {
    PredictionRecord::from_scores_at(
        timestamp,
        format!("sample text for {label}"),
        scores_for(label, confidence),
    )
    .expect("fixture record must be valid")
}

/// `n` identical records.
pub fn records(label: &str, confidence: f64, n: usize) -> Vec<PredictionRecord> {
    (0..n).map(|_| record(label, confidence)).collect()
}

/// Records built from `(label, count, confidence)` groups, in order.
pub fn mixed(groups: &[(&str, usize, f64)]) -> Vec<PredictionRecord> {
    groups
        .iter()
        .flat_map(|&(label, n, confidence)| records(label, confidence, n))
        .collect()
}

/// Records spaced `step` apart starting at `t0()`, cycling through `labels`.
pub fn timeline(labels: &[&str], confidence: f64, n: usize, step: Duration) -> Vec<PredictionRecord> {
    (0..n)
        .map(|i| record_at(labels[i % labels.len()], confidence, t0() + step * i as i32))
        .collect()
}

// ── Event sink ───────────────────────────────────────────────────────────────

/// Sink that keeps every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<MonitorEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MonitorEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(MonitorEvent::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.names().iter().filter(|n| **n == name).count()
    }
}

impl IEventSink for RecordingSink {
    fn emit(&self, event: &MonitorEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_for_low_confidence_keeps_label_on_top() {
        for c in [0.2, 0.3, 0.34, 0.5, 0.7, 0.9, 1.0] {
            let r = record("pos", c);
            assert_eq!(r.predicted_label, "pos", "confidence {c}");
            assert!((r.confidence - c).abs() < 1e-12);
        }
    }

    #[test]
    fn golden_files_parse() {
        assert!(!drift_scenarios().is_empty());
        assert!(!retraining_scenarios().is_empty());
    }
}
