//! TorchScript classifier executed by libtorch.

use image::DynamicImage;
use tch::{CModule, Device, Kind, Tensor};

use cxr_common::{Label, Prediction};

use super::preprocess::{self, INPUT_SIZE};
use super::{Classifier, ClassifyError, ModelError};

/// Classifier backed by a TorchScript module on CPU.
pub struct TorchClassifier {
    module: CModule,
}

impl TorchClassifier {
    pub fn load(path: &str) -> Result<Self, ModelError> {
        let module = CModule::load_on_device(path, Device::Cpu).map_err(|e| ModelError::Load {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { module })
    }
}

impl Classifier for TorchClassifier {
    fn kind(&self) -> &'static str {
        "torch"
    }

    fn is_real_model(&self) -> bool {
        true
    }

    fn classify(&self, image: &DynamicImage) -> Result<Prediction, ClassifyError> {
        let size = INPUT_SIZE as i64;
        let input = preprocess::to_input_tensor(image);
        let data = input
            .as_slice()
            .ok_or_else(|| ClassifyError("non-contiguous input tensor".to_string()))?;

        let tensor = Tensor::from_slice(data).reshape([1, 3, size, size]);

        let output = self
            .module
            .forward_ts(&[tensor])
            .map_err(|e| ClassifyError(e.to_string()))?
            .softmax(1, Kind::Float);

        let flat = output.reshape([-1]);
        let probs: Vec<f32> = Vec::try_from(&flat).map_err(|e| ClassifyError(e.to_string()))?;

        if probs.len() < Label::ALL.len() {
            return Err(ClassifyError(format!(
                "model produced {} scores for {} labels",
                probs.len(),
                Label::ALL.len()
            )));
        }

        let mut percentages = [0f64; Label::ALL.len()];
        for (slot, value) in percentages.iter_mut().zip(probs.iter()) {
            *slot = f64::from(*value) * 100.0;
        }

        Ok(Prediction::from_percentages(percentages, None))
    }
}
