//! The diagnostic label set.

use serde::{Deserialize, Serialize};

/// The closed set of diagnostic classes the classifier can predict.
///
/// Model output vectors are interpreted in `Label::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Covid,
    Pneumonia,
    Normal,
}

impl Label {
    /// All labels, in model output order.
    pub const ALL: [Label; 3] = [Label::Covid, Label::Pneumonia, Label::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Covid => "Covid",
            Label::Pneumonia => "Pneumonia",
            Label::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serialization() {
        let label = Label::Covid;
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#""Covid""#);

        let parsed: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Label::Covid);
    }

    #[test]
    fn test_label_roundtrip_all() {
        for label in Label::ALL {
            let json = serde_json::to_string(&label).unwrap();
            let parsed: Label = serde_json::from_str(&json).unwrap();
            assert_eq!(label, parsed);
        }
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(Label::Pneumonia.to_string(), "Pneumonia");
        assert_eq!(Label::Normal.as_str(), "Normal");
    }
}
