// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// One linear pass per interaction:
//
//   Step 1: Pick the feature vector
//           - Current data → FeatureAssembler  (Layer 4)
//           - Sample       → Preset            (Layer 4)
//   Step 2: Call the model through the adapter (Layer 5)
//   Step 3: Pick the canned message            (Layer 3)
//
// Any failure in steps 1–2 ends the interaction with one
// generic message that embeds the underlying error text.
// No retry, no fallback model.

use std::fmt;

use anyhow::Result;

use crate::data::{assembler::FeatureAssembler, presets::Preset};
use crate::domain::disease::DiseaseCase;
use crate::domain::field::FormInput;
use crate::domain::prediction::FeatureVector;
use crate::ml::adapter::InferenceAdapter;

/// The three actions a disease form offers.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// "Predict with Current Data"
    Current(FormInput),
    /// "Load & Predict with Positive/Negative Sample"
    Sample(Preset),
}

/// What the user sees at the end of an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Verdict { label: u8, message: &'static str },
    Failed(String),
}

impl Outcome {
    pub fn is_positive(&self) -> bool {
        matches!(self, Outcome::Verdict { label: 1, .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Verdict { message, .. } => f.write_str(message),
            Outcome::Failed(text) => f.write_str(text),
        }
    }
}

pub struct PredictUseCase {
    adapter: InferenceAdapter,
}

impl PredictUseCase {
    pub fn new(adapter: InferenceAdapter) -> Self {
        Self { adapter }
    }

    /// Run one interaction. Never fails: errors become `Outcome::Failed`.
    pub fn execute(&self, case: DiseaseCase, trigger: &Trigger) -> Outcome {
        match self.features(case, trigger).and_then(|v| self.adapter.predict(case, &v)) {
            Ok(label) => {
                tracing::info!("{} prediction: label {}", case, label);
                Outcome::Verdict { label, message: case.messages().select(label) }
            }
            Err(e) => {
                tracing::warn!("{} prediction failed: {e:#}", case);
                Outcome::Failed(format!("An error occurred: {e:#}"))
            }
        }
    }

    fn features(&self, case: DiseaseCase, trigger: &Trigger) -> Result<FeatureVector> {
        match trigger {
            Trigger::Current(input) => FeatureAssembler::new(case).assemble(input),
            Trigger::Sample(preset) => Ok(preset.vector(case)),
        }
    }
}
