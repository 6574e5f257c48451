// ============================================================
// Layer 4 — Feature Assembly
// ============================================================
// Everything between a filled-in form and a model input:
//
//   FormInput (raw widget values)
//       │
//       ▼
//   schema     → ordered FieldDescriptors + lookup tables
//       │
//       ▼
//   assembler  → FeatureVector in model column order
//
//   presets    → literal FeatureVectors that skip the form
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Per-case field lists and categorical lookup tables
pub mod schema;

/// Raw form values → ordered feature vector
pub mod assembler;

/// Positive / negative sample vectors
pub mod presets;
