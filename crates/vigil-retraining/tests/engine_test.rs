//! RetrainingEngine over in-memory and file-backed stores.

use std::sync::Arc;

use test_fixtures::{mixed, records, RecordingSink};
use vigil_core::config::{DriftConfig, RetrainingConfig};
use vigil_core::traits::NullSink;
use vigil_core::{BaselineDistribution, DriftVerdict, RetrainingVerdict};
use vigil_drift::DriftEngine;
use vigil_retraining::RetrainingEngine;
use vigil_storage::{JsonSnapshot, JsonlLog, MemoryLog, MemorySnapshot};

type MemDrift = DriftEngine<MemorySnapshot<BaselineDistribution>, MemoryLog<DriftVerdict>>;

fn engines(
    config: RetrainingConfig,
) -> (
    Arc<MemDrift>,
    RetrainingEngine<MemorySnapshot<BaselineDistribution>, MemoryLog<DriftVerdict>, Arc<MemoryLog<RetrainingVerdict>>>,
    Arc<MemoryLog<RetrainingVerdict>>,
    Arc<RecordingSink>,
) {
    let sink = Arc::new(RecordingSink::new());
    let drift = Arc::new(DriftEngine::new(
        MemorySnapshot::new("baseline"),
        MemoryLog::new("drift_reports"),
        DriftConfig::default(),
        sink.clone(),
    ));
    let log = Arc::new(MemoryLog::new("retraining_triggers"));
    let engine = RetrainingEngine::new(drift.clone(), log.clone(), config, sink.clone());
    (drift, engine, log, sink)
}

#[test]
fn volume_gate_blocks_drift_and_low_confidence() {
    let (drift, engine, _, _) = engines(RetrainingConfig::default());
    drift.set_baseline(&records("A", 0.9, 100)).unwrap();

    let verdict = engine.evaluate(&records("B", 0.4, 99)).unwrap();
    assert!(!verdict.volume_gate_passed);
    assert!(verdict.confidence_gate_passed);
    assert!(verdict.drift_gate_passed);
    assert!(!verdict.should_retrain);
    assert!(verdict.reason.contains("insufficient samples: 99/100"));
}

#[test]
fn drift_alone_triggers_once_volume_is_met() {
    let (drift, engine, _, sink) = engines(RetrainingConfig::default());
    drift.set_baseline(&records("A", 0.9, 100)).unwrap();

    let verdict = engine.evaluate(&records("B", 0.9, 100)).unwrap();
    assert!(verdict.should_retrain);
    assert!(!verdict.confidence_gate_passed);
    assert_eq!(verdict.reason, "drift detected: score=1.0000");
    assert_eq!(sink.count("retraining_evaluated"), 1);
}

#[test]
fn first_evaluation_bootstraps_and_reports_no_drift() {
    let (drift, engine, _, _) = engines(RetrainingConfig::default());
    let verdict = engine.evaluate(&mixed(&[("A", 60, 0.9), ("B", 60, 0.9)])).unwrap();

    assert!(!verdict.drift_gate_passed);
    assert!(!verdict.should_retrain);
    assert!(drift.baseline().unwrap().is_some());
}

#[test]
fn evaluate_alone_records_nothing() {
    let (_, engine, log, _) = engines(RetrainingConfig::default());
    engine.evaluate(&records("A", 0.5, 150)).unwrap();
    assert_eq!(log.raw_len().unwrap(), 0);

    engine.evaluate_and_record(&records("A", 0.5, 150)).unwrap();
    assert_eq!(engine.history().unwrap().len(), 1);
}

#[test]
fn last_triggered_and_statistics() {
    let (_, engine, _, _) = engines(RetrainingConfig::default());
    let low = engine.evaluate_and_record(&records("A", 0.5, 150)).unwrap();
    engine.evaluate_and_record(&records("A", 0.9, 150)).unwrap();
    engine.evaluate_and_record(&records("A", 0.9, 10)).unwrap();

    assert_eq!(engine.last_triggered().unwrap(), Some(low.clone()));

    let stats = engine.statistics().unwrap();
    assert_eq!(stats.total_evaluations, 3);
    assert_eq!(stats.triggered_count, 1);
    assert_eq!(stats.last_triggered_at, Some(low.evaluated_at));
    assert_eq!(stats.top_reasons.len(), 1);
    assert_eq!(stats.top_reasons[0].reason, low.reason);

    engine.clear_history().unwrap();
    assert!(engine.last_triggered().unwrap().is_none());
    assert_eq!(engine.statistics().unwrap().total_evaluations, 0);
}

#[test]
fn unavailable_history_fails_without_partial_state() {
    let (_, engine, log, _) = engines(RetrainingConfig::default());
    log.set_available(false);
    let err = engine.evaluate_and_record(&records("A", 0.5, 150)).unwrap_err();
    assert!(err.is_storage_unavailable());

    log.set_available(true);
    assert!(engine.history().unwrap().is_empty());
}

#[test]
fn history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let open = || {
        let drift = Arc::new(DriftEngine::new(
            JsonSnapshot::<BaselineDistribution>::open(dir.path().join("baseline_distribution.json")).unwrap(),
            JsonlLog::<DriftVerdict>::open(dir.path().join("drift_reports.jsonl")).unwrap(),
            DriftConfig::default(),
            Arc::new(NullSink),
        ));
        RetrainingEngine::new(
            drift,
            JsonlLog::<RetrainingVerdict>::open(dir.path().join("retraining_triggers.jsonl")).unwrap(),
            RetrainingConfig::default(),
            Arc::new(NullSink),
        )
    };

    let recorded = open().evaluate_and_record(&records("A", 0.5, 120)).unwrap();
    let reopened = open();
    assert_eq!(reopened.history().unwrap(), vec![recorded.clone()]);
    assert_eq!(reopened.last_triggered().unwrap(), Some(recorded));
}
