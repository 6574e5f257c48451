// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All burn-specific code lives here. No other layer builds
// tensors or modules; they see models only through the
// domain Classifier trait.
//
//   model.rs      — DiseaseClassifier: linear → ReLU → linear,
//                   two logits (negative, positive)
//
//   inferencer.rs — one loaded model handle on the NdArray CPU
//                   backend; implements Classifier
//
//   registry.rs   — the five handles, loaded once at startup
//
//   adapter.rs    — case + feature vector → label
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §6 (Saving and Loading Models)

/// Binary classifier module
pub mod model;

/// Single model handle
pub mod inferencer;

/// Read-only set of loaded handles
pub mod registry;

/// The single prediction entry point
pub mod adapter;
