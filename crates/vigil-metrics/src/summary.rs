//! Point-in-time summaries. Pure, single pass over the records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use vigil_core::{MetricsSummary, PredictionRecord};

/// Summarize `records`, stamped with the current time.
pub fn summarize(records: &[PredictionRecord]) -> MetricsSummary {
    summarize_at(records, Utc::now())
}

/// Summarize `records`, stamped with `computed_at`.
pub fn summarize_at<'a, I>(records: I, computed_at: DateTime<Utc>) -> MetricsSummary
where
    I: IntoIterator<Item = &'a PredictionRecord>,
{
    // label -> (count, confidence sum)
    let mut per_label: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    let mut total = 0usize;
    let mut confidence_sum = 0.0;

    for record in records {
        let entry = per_label
            .entry(record.predicted_label.as_str())
            .or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.confidence;
        total += 1;
        confidence_sum += record.confidence;
    }

    if total == 0 {
        return MetricsSummary::empty(computed_at);
    }

    let mut label_counts = BTreeMap::new();
    let mut label_percentages = BTreeMap::new();
    let mut mean_confidence_by_label = BTreeMap::new();
    for (label, (count, sum)) in per_label {
        label_counts.insert(label.to_string(), count);
        label_percentages.insert(label.to_string(), count as f64 / total as f64 * 100.0);
        mean_confidence_by_label.insert(label.to_string(), sum / count as f64);
    }

    MetricsSummary {
        computed_at,
        total_count: total,
        label_counts,
        label_percentages,
        mean_confidence: confidence_sum / total as f64,
        mean_confidence_by_label,
    }
}
