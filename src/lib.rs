#![recursion_limit = "256"]

// ============================================================
// medical_diagnosis — library root
// ============================================================
// Six layers, top to bottom:
//
//   cli          — Layer 1: clap commands, views, terminal forms
//   application  — Layer 2: the predict use case
//   domain       — Layer 3: cases, fields, vectors, Classifier
//   data         — Layer 4: schema tables, assembly, presets
//   ml           — Layer 5: burn model, handles, registry
//   infra        — Layer 6: model artifacts on disk
//
// The binary in main.rs only sets up logging and calls Cli::run.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
