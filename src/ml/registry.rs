// ============================================================
// Layer 5 — Model Registry
// ============================================================
// The read-only set of loaded model handles, one per disease
// case. Built once at startup; never mutated afterwards.
//
// Loading is all-or-nothing: if any of the five artifacts fails
// to load, `load_all` returns the error and nothing is served.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::domain::disease::DiseaseCase;
use crate::domain::traits::Classifier;
use crate::infra::model_store::ModelStore;
use crate::ml::inferencer::Inferencer;

#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<DiseaseCase, Box<dyn Classifier>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every disease model from the store.
    pub fn load_all(store: &ModelStore) -> Result<Self> {
        let mut registry = Self::new();
        for case in DiseaseCase::ALL {
            let model = Inferencer::from_store(store, case)
                .with_context(|| format!("Failed to load the {case} model"))?;
            registry = registry.with_model(case, Box::new(model));
        }
        tracing::info!("All {} models loaded from '{}'", registry.len(), store.dir().display());
        Ok(registry)
    }

    pub fn with_model(mut self, case: DiseaseCase, model: Box<dyn Classifier>) -> Self {
        self.models.insert(case, model);
        self
    }

    pub fn get(&self, case: DiseaseCase) -> Option<&dyn Classifier> {
        self.models.get(&case).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
