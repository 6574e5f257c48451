// ============================================================
// Layer 5 — Inference Adapter
// ============================================================
// The only place a model is called. Looks up the handle of a
// disease case and hands it the vector unchanged; it does not
// check width or order. Whatever the model raises comes back
// to the caller as-is.

use anyhow::{anyhow, Result};

use crate::domain::disease::DiseaseCase;
use crate::domain::prediction::FeatureVector;
use crate::ml::registry::ModelRegistry;

pub struct InferenceAdapter {
    registry: ModelRegistry,
}

impl InferenceAdapter {
    pub fn new(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    /// Run one prediction and return the label.
    pub fn predict(&self, case: DiseaseCase, features: &FeatureVector) -> Result<u8> {
        let model = self
            .registry
            .get(case)
            .ok_or_else(|| anyhow!("no model loaded for {case}"))?;
        model.predict(features.values())
    }
}
