// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and routes to the views:
//
//   home     — welcome page
//   info     — disease description, symptoms, risk factors
//   form     — field listing of a disease form
//   predict  — one prediction (sample, --set values, or prompts)
//   menu     — interactive navigation over all six views
//
// Commands that predict load all five models first; a load
// failure is returned from `run` and ends the process.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod form;
pub mod menu;
pub mod render;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PredictArgs};

use crate::application::predict_use_case::{PredictUseCase, Trigger};
use crate::domain::disease::DiseaseCase;
use crate::infra::model_store::ModelStore;
use crate::ml::{adapter::InferenceAdapter, registry::ModelRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "medical-diagnosis",
    version,
    about = "Predict diabetes, heart disease, Parkinson's, lung cancer and hypothyroidism from patient measurements."
)]
pub struct Cli {
    /// Directory holding the five model artifacts
    #[arg(long, global = true, default_value = "Models")]
    pub models_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch.
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match &self.command {
            Commands::Home          => render::home(&mut out)?,
            Commands::Info(args)    => render::disease_info(&mut out, args.disease.into())?,
            Commands::Form(args)    => render::form_fields(&mut out, args.disease.into())?,
            Commands::Predict(args) => self.run_predict(args, &mut out)?,
            Commands::Menu          => self.run_menu(out)?,
        }
        Ok(())
    }

    /// Load every model; any failure here is fatal.
    fn use_case(&self) -> Result<PredictUseCase> {
        let store = ModelStore::new(&self.models_dir);
        let registry = ModelRegistry::load_all(&store)?;
        Ok(PredictUseCase::new(InferenceAdapter::new(registry)))
    }

    fn run_predict(&self, args: &PredictArgs, out: &mut impl Write) -> Result<()> {
        let case = DiseaseCase::from(args.disease);

        // --set values are checked before any model is loaded.
        let given = match args.sample {
            Some(sample) => Some(Trigger::Sample(sample.into())),
            None if args.interactive => None,
            None => Some(Trigger::Current(args.form_input()?)),
        };
        let use_case = self.use_case()?;

        let trigger = match given {
            Some(trigger) => trigger,
            None => {
                render::disease_info(out, case)?;
                let stdin = io::stdin();
                let mut form = form::FormRenderer::new(stdin.lock(), &mut *out);
                Trigger::Current(form.render_form(case)?)
            }
        };

        let outcome = use_case.execute(case, &trigger);
        render::outcome(out, &outcome)
    }

    fn run_menu(&self, out: impl Write) -> Result<()> {
        let use_case = self.use_case()?;
        let stdin = io::stdin();
        menu::Navigator::new(stdin.lock(), out, &use_case).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::inferencer::{InferBackend, InferDevice};
    use crate::ml::model::DiseaseClassifierConfig;
    use crate::data::schema;

    fn predict(cli: &Cli) -> Result<String> {
        let Commands::Predict(args) = &cli.command else {
            panic!("not a predict command");
        };
        let mut out = Vec::new();
        cli.run_predict(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_bad_set_key_is_reported_before_models_load() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-models");
        let cli = Cli::try_parse_from([
            "medical-diagnosis", "--models-dir", missing.to_str().unwrap(),
            "predict", "diabetes", "--set", "chol=200",
        ])
        .unwrap();
        let err = predict(&cli).unwrap_err();
        assert!(err.to_string().contains("has no field 'chol'"), "{err:#}");
    }

    #[test]
    fn test_missing_models_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "medical-diagnosis", "--models-dir", dir.path().to_str().unwrap(),
            "predict", "diabetes", "--sample", "positive",
        ])
        .unwrap();
        let err = predict(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load the Diabetes model"));
    }

    #[test]
    fn test_predict_prints_one_message() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let device = InferDevice::default();
        for case in DiseaseCase::ALL {
            let cfg = DiseaseClassifierConfig::new(schema::fields(case).len());
            store.save(case, &cfg, &cfg.init::<InferBackend>(&device)).unwrap();
        }

        let cli = Cli::try_parse_from([
            "medical-diagnosis", "--models-dir", dir.path().to_str().unwrap(),
            "predict", "heart-disease", "--set", "sex=Male",
        ])
        .unwrap();
        let out = predict(&cli).unwrap();
        let m = DiseaseCase::HeartDisease.messages();
        assert!(out.contains(m.positive) != out.contains(m.negative));
    }
}
