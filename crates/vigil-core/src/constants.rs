/// vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance for `sum(scores) == 1.0` on a prediction record.
pub const SCORE_SUM_TOLERANCE: f64 = 1e-4;

/// Tolerance for `confidence == scores[predicted_label]`.
pub const CONFIDENCE_MATCH_TOLERANCE: f64 = 1e-9;

/// Upper bound of the drift score.
pub const MAX_DRIFT_SCORE: f64 = 1.0;

/// Separator between triggered gate reasons.
pub const REASON_SEPARATOR: &str = " | ";

/// Reason text when no gate is adverse.
pub const NO_RETRAINING_NEEDED: &str = "no retraining needed";
