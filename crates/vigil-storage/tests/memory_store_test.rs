//! In-memory stores share the decode path and can simulate an offline medium.

use proptest::prelude::*;
use test_fixtures::record;
use vigil_core::config::DecodeMode;
use vigil_core::models::BaselineDistribution;
use vigil_core::traits::{IRecordLog, ISnapshotStore};
use vigil_core::PredictionRecord;
use vigil_storage::{MemoryLog, MemorySnapshot};

#[test]
fn memory_log_roundtrip_and_clear() {
    let log = MemoryLog::<PredictionRecord>::new("predictions");
    let r = record("a", 0.7);
    log.append(&r).unwrap();
    assert_eq!(log.load_all().unwrap(), vec![r]);
    log.clear().unwrap();
    assert!(log.load_all().unwrap().is_empty());
}

#[test]
fn offline_memory_log_fails_every_operation() {
    let log = MemoryLog::<PredictionRecord>::new("predictions");
    log.append(&record("a", 0.7)).unwrap();
    log.set_available(false);

    assert!(log.append(&record("b", 0.7)).unwrap_err().is_storage_unavailable());
    assert!(log.load_all().unwrap_err().is_storage_unavailable());
    assert!(log.clear().unwrap_err().is_storage_unavailable());

    log.set_available(true);
    // The failed append left nothing behind; the failed clear removed nothing.
    assert_eq!(log.load_all().unwrap().len(), 1);
}

#[test]
fn memory_log_honors_decode_mode() {
    let strict = MemoryLog::<PredictionRecord>::new("strict");
    strict.append(&record("a", 0.7)).unwrap();
    strict.push_raw("{}").unwrap();
    assert!(strict.load_all().unwrap_err().is_decode());

    let lenient = MemoryLog::<PredictionRecord>::new("lenient").with_mode(DecodeMode::Lenient);
    lenient.append(&record("a", 0.7)).unwrap();
    lenient.push_raw("{}").unwrap();
    lenient.push_raw("").unwrap();
    assert_eq!(lenient.load_all().unwrap().len(), 1);
    assert_eq!(lenient.raw_len().unwrap(), 3);
}

#[test]
fn memory_snapshot_overwrites_and_clears() {
    let store = MemorySnapshot::<BaselineDistribution>::new("baseline");
    assert!(store.read().unwrap().is_none());

    let b = BaselineDistribution {
        captured_at: chrono::Utc::now(),
        distribution: Default::default(),
        sample_count: 0,
        mean_confidence: 0.0,
    };
    store.write(&b).unwrap();
    assert_eq!(store.read().unwrap(), Some(b));

    store.put_raw("not json").unwrap();
    assert!(store.read().unwrap_err().is_decode());

    store.clear().unwrap();
    assert!(store.read().unwrap().is_none());
}

proptest! {
    #[test]
    fn prop_append_load_preserves_order(
        picks in proptest::collection::vec((0usize..3, 50u32..100), 0..40)
    ) {
        let labels = ["negative", "neutral", "positive"];
        let log = MemoryLog::<PredictionRecord>::new("prop");
        let mut expected = Vec::new();
        for (label, pct) in picks {
            let r = record(labels[label], pct as f64 / 100.0);
            log.append(&r).unwrap();
            expected.push(r);
        }
        prop_assert_eq!(log.load_all().unwrap(), expected);
    }
}
