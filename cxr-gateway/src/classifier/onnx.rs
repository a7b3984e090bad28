//! ONNX classifier executed by tract.

use image::DynamicImage;
use tract_onnx::prelude::*;

use cxr_common::{Label, Prediction};

use super::preprocess::{self, INPUT_SIZE};
use super::{Classifier, ClassifyError, ModelError};

type RunnableOnnxModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Classifier backed by an ONNX graph.
pub struct OnnxClassifier {
    model: RunnableOnnxModel,
}

impl OnnxClassifier {
    /// Load and optimize an ONNX model with a pinned 1x3x224x224 f32 input.
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let size = INPUT_SIZE as usize;
        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 3, size, size)),
                )
            })
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| ModelError::Load {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { model })
    }
}

impl Classifier for OnnxClassifier {
    fn kind(&self) -> &'static str {
        "onnx"
    }

    fn is_real_model(&self) -> bool {
        true
    }

    fn classify(&self, image: &DynamicImage) -> Result<Prediction, ClassifyError> {
        let size = INPUT_SIZE as usize;
        let input = preprocess::to_input_tensor(image);

        let tensor = tract_ndarray::Array4::from_shape_vec((1, 3, size, size), input.into_raw_vec())
            .map_err(|e| ClassifyError(e.to_string()))?
            .into_tensor();

        let result = self
            .model
            .run(tvec!(tensor.into()))
            .map_err(|e| ClassifyError(e.to_string()))?;

        let output = result[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError(e.to_string()))?;

        if output.len() < Label::ALL.len() {
            return Err(ClassifyError(format!(
                "model produced {} scores for {} labels",
                output.len(),
                Label::ALL.len()
            )));
        }

        // Logit-shaped outputs can go negative; the response invariant is
        // non-negative percentages.
        let mut scores = [0f64; Label::ALL.len()];
        for (slot, value) in scores.iter_mut().zip(output.iter()) {
            *slot = f64::from(value.max(0.0));
        }

        let sum: f64 = scores.iter().sum::<f64>() + 1e-8;
        let percentages = scores.map(|score| score / sum * 100.0);

        Ok(Prediction::from_percentages(percentages, None))
    }
}
