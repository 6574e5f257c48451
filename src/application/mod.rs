// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one interaction.
//
// Rules for this layer:
//   - No burn code here
//   - No terminal I/O here (that's Layer 1)
//   - No file access here (that's Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Assemble → predict → pick message
pub mod predict_use_case;
