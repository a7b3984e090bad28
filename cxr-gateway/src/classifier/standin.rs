//! Deterministic stand-in classifier used when no model is configured.

use image::DynamicImage;

use cxr_common::Prediction;

use super::{Classifier, ClassifyError};

/// Marker carried in the `note` field of stand-in responses.
pub const STAND_IN_NOTE: &str = "stand-in-model";

/// Fallback classifier that maps mean image brightness to one of three fixed
/// distributions. Keeps `/predict` testable without a trained model.
pub struct StandInClassifier;

impl Classifier for StandInClassifier {
    fn kind(&self) -> &'static str {
        "stand-in"
    }

    fn is_real_model(&self) -> bool {
        false
    }

    fn classify(&self, image: &DynamicImage) -> Result<Prediction, ClassifyError> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();
        // A decoded image always has at least one pixel.
        let count = u64::from(width) * u64::from(height);
        let total: u64 = gray.pixels().map(|p| u64::from(p[0])).sum();
        let mean = total as f64 / count as f64 / 255.0;

        // Darker scans lean Pneumonia, mid-range Covid, bright Normal.
        let percentages = if mean < 0.4 {
            [10.0, 70.0, 20.0]
        } else if mean < 0.6 {
            [65.0, 25.0, 10.0]
        } else {
            [5.0, 10.0, 85.0]
        };

        Ok(Prediction::from_percentages(
            percentages,
            Some(STAND_IN_NOTE.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxr_common::Label;
    use image::{GrayImage, Luma};

    fn uniform_image(brightness: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(32, 32, Luma([brightness])))
    }

    #[test]
    fn test_dark_image_leans_pneumonia() {
        let prediction = StandInClassifier.classify(&uniform_image(20)).unwrap();
        assert_eq!(prediction.predicted_class, Label::Pneumonia);
        assert_eq!(prediction.confidence, 70.0);
    }

    #[test]
    fn test_mid_image_leans_covid() {
        let prediction = StandInClassifier.classify(&uniform_image(128)).unwrap();
        assert_eq!(prediction.predicted_class, Label::Covid);
        assert_eq!(prediction.confidence, 65.0);
    }

    #[test]
    fn test_bright_image_leans_normal() {
        let prediction = StandInClassifier.classify(&uniform_image(220)).unwrap();
        assert_eq!(prediction.predicted_class, Label::Normal);
        assert_eq!(prediction.confidence, 85.0);
    }

    #[test]
    fn test_distribution_sums_to_100() {
        let prediction = StandInClassifier.classify(&uniform_image(128)).unwrap();
        let sum: f64 = prediction.probabilities.values().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let image = uniform_image(90);
        let first = StandInClassifier.classify(&image).unwrap();
        let second = StandInClassifier.classify(&image).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_note_marks_stand_in_output() {
        let prediction = StandInClassifier.classify(&uniform_image(128)).unwrap();
        assert_eq!(prediction.note.as_deref(), Some(STAND_IN_NOTE));
    }
}
