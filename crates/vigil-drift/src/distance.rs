//! Earth-mover's distance between two label distributions.
//!
//! Labels are placed on a line in lexicographic order, one unit apart. A label
//! missing from one side has mass 0 there. Each side is normalized by its own
//! total before the CDFs are compared, as for any weighted empirical
//! distribution. Stored distributions may sum to slightly more or less than 1
//! after percentage rounding; that shortfall never registers as drift.

use std::collections::BTreeSet;

use vigil_core::constants::MAX_DRIFT_SCORE;
use vigil_core::models::Distribution;

/// Wasserstein-1 distance between `a` and `b`, capped at 1.0.
///
/// Two empty (or all-zero) distributions are identical. If exactly one side
/// carries no mass the distributions share nothing and the score is 1.0.
pub fn wasserstein(a: &Distribution, b: &Distribution) -> f64 {
    let total_a: f64 = a.values().sum();
    let total_b: f64 = b.values().sum();

    match (total_a > 0.0, total_b > 0.0) {
        (false, false) => return 0.0,
        (true, false) | (false, true) => return MAX_DRIFT_SCORE,
        (true, true) => {}
    }

    let labels: BTreeSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();

    // Unit spacing: W1 is the sum of |CDF_a - CDF_b| over the gaps between
    // consecutive labels, so the last position contributes nothing.
    let mut cdf_a = 0.0;
    let mut cdf_b = 0.0;
    let mut distance = 0.0;
    for label in labels.iter().take(labels.len().saturating_sub(1)) {
        cdf_a += a.get(*label).copied().unwrap_or(0.0) / total_a;
        cdf_b += b.get(*label).copied().unwrap_or(0.0) / total_b;
        distance += (cdf_a - cdf_b).abs();
    }

    distance.clamp(0.0, MAX_DRIFT_SCORE)
}
