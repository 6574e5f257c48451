// ============================================================
// Layer 5 — Inferencer
// ============================================================
// The in-memory model handle of one disease case. Wraps a
// DiseaseClassifier on the CPU backend and exposes it through
// the domain Classifier trait.
use anyhow::{anyhow, bail, Result};
use burn::prelude::*;
use burn::tensor::TensorData;

use crate::domain::disease::DiseaseCase;
use crate::domain::traits::Classifier;
use crate::infra::model_store::ModelStore;
use crate::ml::model::DiseaseClassifier;

pub type InferBackend = burn::backend::NdArray;
pub type InferDevice  = burn::backend::ndarray::NdArrayDevice;

pub struct Inferencer {
    model:  DiseaseClassifier<InferBackend>,
    device: InferDevice,
}

impl Inferencer {
    pub fn new(model: DiseaseClassifier<InferBackend>, device: InferDevice) -> Self {
        Self { model, device }
    }

    /// Load the artifact of `case` from the store.
    pub fn from_store(store: &ModelStore, case: DiseaseCase) -> Result<Self> {
        let device = InferDevice::default();
        let model  = store.load::<InferBackend>(case, &device)?;
        tracing::info!("Loaded {} model ({} features)", case, model.input_dim);
        Ok(Self { model, device })
    }
}

impl Classifier for Inferencer {
    fn predict(&self, features: &[f64]) -> Result<u8> {
        let expected = self.model.input_dim;
        if features.len() != expected {
            bail!(
                "X has {} features, but DiseaseClassifier is expecting {} features as input",
                features.len(),
                expected
            );
        }

        let values: Vec<f32> = features.iter().map(|&v| v as f32).collect();
        let input = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(values, [1, expected]),
            &self.device,
        );

        let logits: Vec<f32> = self
            .model
            .forward(input)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("cannot read model output: {e:?}"))?;

        let label = match logits.as_slice() {
            [negative, positive] => u8::from(positive > negative),
            other => bail!("expected 2 logits, model returned {}", other.len()),
        };

        tracing::debug!("logits={:?} label={}", logits, label);
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::presets::Preset;
    use crate::ml::model::DiseaseClassifierConfig;

    fn inferencer(input_dim: usize) -> Inferencer {
        let device = InferDevice::default();
        let model = DiseaseClassifierConfig::new(input_dim).init::<InferBackend>(&device);
        Inferencer::new(model, device)
    }

    #[test]
    fn test_positive_presets_are_deterministic() {
        for case in DiseaseCase::ALL {
            let features = Preset::Positive.values(case);
            let model = inferencer(features.len());
            let first = model.predict(features).unwrap();
            assert!(first <= 1);
            for _ in 0..5 {
                assert_eq!(model.predict(features).unwrap(), first, "{case}");
            }
        }
    }

    #[test]
    fn test_wrong_width_fails() {
        let model = inferencer(8);
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("X has 2 features"));
    }
}
