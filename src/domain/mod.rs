// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what the
// system talks about: disease cases, form fields, feature
// vectors and the classifier contract.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O or terminal I/O
//   - NO clap types
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The five disease cases and their canned texts
pub mod disease;

// Input field descriptors, widget kinds and raw form values
pub mod field;

// Feature vectors and result messages
pub mod prediction;

// Core abstractions (traits) that other layers implement
pub mod traits;
