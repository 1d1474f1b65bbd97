// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DATA_DIR: &str = "logs";
pub const DEFAULT_PREDICTIONS_FILE: &str = "predictions.jsonl";
pub const DEFAULT_METRICS_FILE: &str = "metrics.jsonl";
pub const DEFAULT_BASELINE_FILE: &str = "baseline_distribution.json";
pub const DEFAULT_DRIFT_HISTORY_FILE: &str = "drift_reports.jsonl";
pub const DEFAULT_RETRAINING_HISTORY_FILE: &str = "retraining_triggers.jsonl";

// --- Metrics ---
pub const DEFAULT_WINDOW_HOURS: u64 = 1;
/// One hundred years.
pub const MAX_WINDOW_HOURS: u64 = 24 * 365 * 100;

// --- Drift ---
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.15;
pub const DEFAULT_CONFIDENCE_SHIFT_ADVISORY: f64 = 0.05;
pub const DEFAULT_CONFIDENCE_DROP_ESCALATION: f64 = 0.10;

// --- Retraining ---
pub const DEFAULT_MIN_SAMPLES: usize = 100;
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.70;
pub const DEFAULT_TOP_REASONS: usize = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
