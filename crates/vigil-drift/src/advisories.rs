//! Advisories attached to a drift verdict.

use vigil_core::config::DriftConfig;
use vigil_core::models::{Advisory, Severity};

/// Findings for one measured comparison, in fixed rule order:
/// drift flag, confidence shift, then confidence-drop escalation.
pub fn generate(
    drift_score: f64,
    is_drifting: bool,
    confidence_delta: f64,
    config: &DriftConfig,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if is_drifting {
        advisories.push(Advisory {
            severity: Severity::Warning,
            message: format!(
                "label distribution drift detected: score {drift_score:.4} exceeds threshold {}",
                config.threshold
            ),
            action: "review recent inputs for distribution shift".into(),
        });
    }

    if confidence_delta.abs() > config.confidence_shift_advisory {
        let direction = if confidence_delta > 0.0 {
            "increased"
        } else {
            "decreased"
        };
        advisories.push(Advisory {
            severity: Severity::Info,
            message: format!(
                "mean confidence {direction} by {:.4}",
                confidence_delta.abs()
            ),
            action: "monitor confidence trend".into(),
        });
    }

    if confidence_delta < -config.confidence_drop_escalation {
        advisories.push(Advisory {
            severity: Severity::Critical,
            message: format!(
                "mean confidence dropped by {:.4}, more than {}",
                -confidence_delta, config.confidence_drop_escalation
            ),
            action: "consider retraining the model".into(),
        });
    }

    advisories
}

/// Advisory for an evaluation that captured the baseline instead of measuring.
pub fn baseline_created(sample_count: usize) -> Advisory {
    Advisory {
        severity: Severity::Info,
        message: format!("baseline created from {sample_count} records"),
        action: "evaluate again once new predictions arrive".into(),
    }
}

/// Advisory for an evaluation with neither a baseline nor records.
pub fn insufficient_data() -> Advisory {
    Advisory {
        severity: Severity::Info,
        message: "no baseline and no records to create one".into(),
        action: "log predictions or set a baseline explicitly".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_comparison_has_no_advisories() {
        assert!(generate(0.01, false, 0.02, &DriftConfig::default()).is_empty());
    }

    #[test]
    fn rules_fire_in_order() {
        let advisories = generate(0.4, true, -0.2, &DriftConfig::default());
        let severities: Vec<Severity> = advisories.iter().map(|a| a.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Warning, Severity::Info, Severity::Critical]
        );
        assert!(advisories[0].message.contains("0.4000"));
        assert!(advisories[0].message.contains("0.15"));
        assert!(advisories[1].message.contains("decreased by 0.2000"));
    }

    #[test]
    fn rise_in_confidence_never_escalates() {
        let advisories = generate(0.0, false, 0.3, &DriftConfig::default());
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].message.contains("increased"));
    }

    #[test]
    fn boundaries_are_exclusive() {
        let config = DriftConfig::default();
        assert!(generate(0.0, false, -0.05, &config).is_empty());
        let at_escalation = generate(0.0, false, -0.10, &config);
        assert_eq!(at_escalation.len(), 1);
    }
}
