use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIDENCE_MATCH_TOLERANCE, SCORE_SUM_TOLERANCE};
use crate::errors::{VigilError, VigilResult};
use crate::traits::Record;

use super::check_mass;

/// One classification event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Wall-clock time the record was created.
    pub timestamp: DateTime<Utc>,
    /// Text the model classified. Stored as-is.
    pub input_text: String,
    /// Argmax label of `scores`.
    pub predicted_label: String,
    /// `scores[predicted_label]`.
    pub confidence: f64,
    /// Label → probability; sums to 1.
    pub scores: BTreeMap<String, f64>,
}

impl PredictionRecord {
    /// Build a record stamped with the current time from raw model scores.
    pub fn from_scores(
        input_text: impl Into<String>,
        scores: BTreeMap<String, f64>,
    ) -> VigilResult<Self> {
        Self::from_scores_at(Utc::now(), input_text, scores)
    }

    /// Build a record with an explicit timestamp.
    ///
    /// The predicted label is the highest-scoring one; equal scores resolve
    /// to the lexicographically smallest label.
    pub fn from_scores_at(
        timestamp: DateTime<Utc>,
        input_text: impl Into<String>,
        scores: BTreeMap<String, f64>,
    ) -> VigilResult<Self> {
        let (label, confidence) = argmax(&scores).ok_or_else(|| VigilError::InvalidRecord {
            reason: "scores must contain at least one label".into(),
        })?;
        let record = Self {
            timestamp,
            input_text: input_text.into(),
            predicted_label: label,
            confidence,
            scores,
        };
        record
            .validate()
            .map_err(|reason| VigilError::InvalidRecord { reason })?;
        Ok(record)
    }
}

fn argmax(scores: &BTreeMap<String, f64>) -> Option<(String, f64)> {
    let mut best: Option<(&String, f64)> = None;
    for (label, &score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((label, score)),
        }
    }
    best.map(|(label, score)| (label.clone(), score))
}

impl Record for PredictionRecord {
    const KIND: &'static str = "prediction";
    const VERSION: u32 = 1;

    fn validate(&self) -> Result<(), String> {
        if self.scores.is_empty() {
            return Err("scores must contain at least one label".into());
        }
        for (label, &score) in &self.scores {
            check_mass("scores", label, score)?;
        }

        let sum: f64 = self.scores.values().sum();
        if (sum - 1.0).abs() > SCORE_SUM_TOLERANCE {
            return Err(format!("scores sum to {sum:.6}, expected 1.0"));
        }

        let Some(&labelled) = self.scores.get(&self.predicted_label) else {
            return Err(format!(
                "predicted label {:?} is not among the scores",
                self.predicted_label
            ));
        };
        if (labelled - self.confidence).abs() > CONFIDENCE_MATCH_TOLERANCE {
            return Err(format!(
                "confidence {} does not match score {} of {:?}",
                self.confidence, labelled, self.predicted_label
            ));
        }
        if self
            .scores
            .values()
            .any(|&s| s > self.confidence + CONFIDENCE_MATCH_TOLERANCE)
        {
            return Err(format!(
                "predicted label {:?} is not the highest-scoring label",
                self.predicted_label
            ));
        }
        Ok(())
    }
}
