// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only ever talks to a model through
// Classifier. The burn-backed Inferencer (Layer 5) implements
// it for real artifacts; tests implement it with fixed labels.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A loaded model handle: numeric vector in, binary label out.
///
/// Implementations:
///   - Inferencer → burn DiseaseClassifier loaded from disk
pub trait Classifier {
    /// Predict the label (0 or 1) for a single feature vector.
    /// Fails for input the model cannot take, e.g. a wrong feature count.
    fn predict(&self, features: &[f64]) -> Result<u8>;
}
