//! Structured log events for key monitor operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a record appended to a store.
pub fn record_appended(store: &str) {
    tracing::debug!(event = "record_appended", store = %store, "record appended");
}

/// Log a prediction entering the monitor.
pub fn prediction_logged(label: &str, confidence: f64) {
    tracing::info!(
        event = "prediction_logged",
        label = %label,
        confidence = confidence,
        "prediction logged"
    );
}

/// Log a store being emptied.
pub fn store_cleared(store: &str) {
    tracing::info!(event = "store_cleared", store = %store, "store cleared");
}

/// Log a persisted line that failed to decode and was skipped.
pub fn decode_rejected(store: &str, line: usize, reason: &str) {
    tracing::warn!(
        event = "decode_rejected",
        store = %store,
        line = line,
        reason = %reason,
        "persisted line rejected"
    );
}

/// Log a metrics summary appended to history.
pub fn metrics_snapshot_saved(total_count: usize) {
    tracing::info!(
        event = "metrics_snapshot_saved",
        total_count = total_count,
        "metrics snapshot saved"
    );
}

/// Log a baseline capture.
pub fn baseline_captured(sample_count: usize, labels: usize) {
    tracing::info!(
        event = "baseline_captured",
        sample_count = sample_count,
        labels = labels,
        "baseline captured"
    );
}

/// Log a baseline created implicitly by the first evaluation.
pub fn baseline_bootstrapped(sample_count: usize) {
    tracing::info!(
        event = "baseline_bootstrapped",
        sample_count = sample_count,
        "baseline bootstrapped on first evaluation"
    );
}

/// Log a drift measurement. Drifting results are warnings.
pub fn drift_evaluated(drift_score: f64, threshold: f64, is_drifting: bool, advisories: usize) {
    if is_drifting {
        tracing::warn!(
            event = "drift_evaluated",
            drift_score = drift_score,
            threshold = threshold,
            is_drifting = true,
            advisories = advisories,
            "label distribution drift detected"
        );
    } else {
        tracing::info!(
            event = "drift_evaluated",
            drift_score = drift_score,
            threshold = threshold,
            is_drifting = false,
            advisories = advisories,
            "drift evaluated"
        );
    }
}

/// Log a retraining decision. Triggered decisions are warnings.
pub fn retraining_evaluated(should_retrain: bool, reason: &str) {
    if should_retrain {
        tracing::warn!(
            event = "retraining_evaluated",
            should_retrain = true,
            reason = %reason,
            "retraining recommended"
        );
    } else {
        tracing::info!(
            event = "retraining_evaluated",
            should_retrain = false,
            reason = %reason,
            "retraining evaluated"
        );
    }
}
