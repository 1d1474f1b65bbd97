use vigil_core::models::{ReasonCount, RetrainingStats};
use vigil_core::RetrainingVerdict;

/// Aggregate a verdict history given in append order.
///
/// Reasons are counted over triggered verdicts only. Equal counts keep the
/// order in which each reason first appeared.
pub fn aggregate_stats(history: &[RetrainingVerdict], top_n: usize) -> RetrainingStats {
    let total_evaluations = history.len();
    let triggered: Vec<&RetrainingVerdict> =
        history.iter().filter(|v| v.should_retrain).collect();
    let triggered_count = triggered.len();

    let trigger_rate = if total_evaluations == 0 {
        0.0
    } else {
        triggered_count as f64 / total_evaluations as f64
    };

    let mut counts: Vec<ReasonCount> = Vec::new();
    for verdict in &triggered {
        match counts.iter_mut().find(|c| c.reason == verdict.reason) {
            Some(entry) => entry.count += 1,
            None => counts.push(ReasonCount {
                reason: verdict.reason.clone(),
                count: 1,
            }),
        }
    }
    // Stable: ties stay in first-encountered order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);

    RetrainingStats {
        total_evaluations,
        triggered_count,
        trigger_rate,
        last_triggered_at: triggered.last().map(|v| v.evaluated_at),
        top_reasons: counts,
    }
}
