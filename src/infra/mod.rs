// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns shared by the other layers:
//
//   model_store.rs — where the five model artifacts live and
//                    how they are read back (JSON manifest +
//                    Burn CompactRecorder weights)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model artifact reading and writing
pub mod model_store;
