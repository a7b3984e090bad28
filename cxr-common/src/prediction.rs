//! Classification result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Classification result returned by `POST /predict`.
///
/// `confidence` and every probability are percentages; the probabilities sum
/// to ~100 across the full label set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_class: Label,
    pub confidence: f64,
    pub probabilities: BTreeMap<Label, f64>,
    /// Set by the stand-in backend so callers can tell a placeholder
    /// distribution from a real model output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Prediction {
    /// Build a prediction from per-label percentages in `Label::ALL` order.
    ///
    /// The argmax label becomes `predicted_class` and its percentage the
    /// confidence.
    pub fn from_percentages(percentages: [f64; Label::ALL.len()], note: Option<String>) -> Self {
        let mut best = 0;
        for (i, value) in percentages.iter().enumerate() {
            if *value > percentages[best] {
                best = i;
            }
        }

        Self {
            predicted_class: Label::ALL[best],
            confidence: percentages[best],
            probabilities: Label::ALL.iter().copied().zip(percentages).collect(),
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_percentages_picks_argmax() {
        let prediction = Prediction::from_percentages([4.2, 8.5, 87.3], None);
        assert_eq!(prediction.predicted_class, Label::Normal);
        assert_eq!(prediction.confidence, 87.3);
        assert_eq!(prediction.probabilities[&Label::Covid], 4.2);
        assert_eq!(prediction.probabilities[&Label::Pneumonia], 8.5);
    }

    #[test]
    fn test_wire_shape() {
        let prediction = Prediction::from_percentages([4.2, 8.5, 87.3], None);
        let json = serde_json::to_value(&prediction).unwrap();

        assert_eq!(json["predicted_class"], "Normal");
        assert_eq!(json["confidence"], 87.3);
        assert_eq!(json["probabilities"]["Covid"], 4.2);
        assert_eq!(json["probabilities"]["Pneumonia"], 8.5);
        assert_eq!(json["probabilities"]["Normal"], 87.3);
        // note is omitted entirely unless set
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_note_serialized_when_present() {
        let prediction = Prediction::from_percentages([10.0, 70.0, 20.0], Some("stand-in-model".to_string()));
        assert_eq!(prediction.predicted_class, Label::Pneumonia);

        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["note"], "stand-in-model");
    }

    #[test]
    fn test_json_roundtrip() {
        let prediction = Prediction::from_percentages([65.0, 25.0, 10.0], None);
        let json = serde_json::to_string(&prediction).unwrap();
        let parsed: Prediction = serde_json::from_str(&json).unwrap();
        assert_eq!(prediction, parsed);
    }
}
