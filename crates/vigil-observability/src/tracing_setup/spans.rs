//! Span definitions per operation: summary, baseline capture, drift, retraining.

/// Create a metrics summary span.
#[macro_export]
macro_rules! summary_span {
    ($record_count:expr) => {
        tracing::info_span!("vigil.summary", record_count = $record_count)
    };
}

/// Create a baseline capture span.
#[macro_export]
macro_rules! baseline_span {
    ($record_count:expr) => {
        tracing::info_span!("vigil.baseline", record_count = $record_count)
    };
}

/// Create a drift evaluation span.
#[macro_export]
macro_rules! drift_span {
    ($record_count:expr, $threshold:expr) => {
        tracing::info_span!(
            "vigil.drift",
            record_count = $record_count,
            threshold = $threshold
        )
    };
}

/// Create a retraining evaluation span.
#[macro_export]
macro_rules! retraining_span {
    ($record_count:expr, $min_samples:expr) => {
        tracing::info_span!(
            "vigil.retraining",
            record_count = $record_count,
            min_samples = $min_samples
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUMMARY: &str = "vigil.summary";
    pub const BASELINE: &str = "vigil.baseline";
    pub const DRIFT: &str = "vigil.drift";
    pub const RETRAINING: &str = "vigil.retraining";
}
