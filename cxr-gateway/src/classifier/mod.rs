//! Classifier backend abstraction layer.
//!
//! This module defines the `Classifier` trait that abstracts the model
//! backends (TorchScript, ONNX, stand-in) behind a common interface. Exactly
//! one backend is selected at startup from configuration.

mod onnx;
pub mod preprocess;
mod standin;
#[cfg(feature = "torch")]
mod torch;

pub use onnx::OnnxClassifier;
pub use standin::StandInClassifier;
#[cfg(feature = "torch")]
pub use torch::TorchClassifier;

use std::sync::Arc;

use image::DynamicImage;

use cxr_common::Prediction;

use crate::config::{ModelConfig, ModelFormat};

/// Startup-time classifier construction failures.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to load model from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("model format '{format}' is not available in this build (compile with the '{feature}' feature)")]
    FormatUnavailable {
        format: &'static str,
        feature: &'static str,
    },
}

/// Inference failure inside a classifier backend.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ClassifyError(pub String);

/// Capability interface for all classifier backends.
///
/// Implementations are read-only after construction and shared across
/// requests behind an `Arc`.
pub trait Classifier: Send + Sync {
    /// Short identifier for logging ("onnx", "torch", "stand-in").
    fn kind(&self) -> &'static str;

    /// Whether a real trained model backs this classifier.
    fn is_real_model(&self) -> bool;

    /// Classify a decoded image into the fixed label set.
    fn classify(&self, image: &DynamicImage) -> Result<Prediction, ClassifyError>;
}

/// Select and construct the classifier from configuration.
///
/// A configured model that fails to load is a startup error. An absent model
/// configuration selects the stand-in, which is the supported way to run the
/// gateway without a trained artifact.
pub fn from_config(config: &ModelConfig) -> Result<Arc<dyn Classifier>, ModelError> {
    match (&config.path, config.format) {
        (Some(path), Some(ModelFormat::Onnx)) => {
            tracing::info!("Loading ONNX model from {}", path);
            Ok(Arc::new(OnnxClassifier::load(path)?))
        }
        #[cfg(feature = "torch")]
        (Some(path), Some(ModelFormat::Torch)) => {
            tracing::info!("Loading TorchScript model from {}", path);
            Ok(Arc::new(TorchClassifier::load(path)?))
        }
        #[cfg(not(feature = "torch"))]
        (Some(_), Some(ModelFormat::Torch)) => Err(ModelError::FormatUnavailable {
            format: "torch",
            feature: "torch",
        }),
        (None, None) => {
            tracing::info!("No model configured: running with the stand-in classifier");
            Ok(Arc::new(StandInClassifier))
        }
        _ => {
            tracing::warn!(
                "Model path and format must be set together: falling back to the stand-in classifier"
            );
            Ok(Arc::new(StandInClassifier))
        }
    }
}
