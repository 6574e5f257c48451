// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// The subcommands and their flags. clap types stop here:
// DiseaseArg and SampleArg convert into the domain/data types
// through From impls before anything else sees them.
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand, ValueEnum};

use crate::data::{presets::Preset, schema};
use crate::domain::disease::DiseaseCase;
use crate::domain::field::FormInput;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the home page
    Home,

    /// Show the description, symptoms and risk factors of a disease
    Info(DiseaseArgs),

    /// List the input fields of a disease form, in model order
    Form(DiseaseArgs),

    /// Run one prediction for a disease
    Predict(PredictArgs),

    /// Navigate all views interactively
    Menu,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiseaseArg {
    Diabetes,
    HeartDisease,
    Parkinsons,
    LungCancer,
    Thyroid,
}

impl From<DiseaseArg> for DiseaseCase {
    fn from(a: DiseaseArg) -> Self {
        match a {
            DiseaseArg::Diabetes     => DiseaseCase::Diabetes,
            DiseaseArg::HeartDisease => DiseaseCase::HeartDisease,
            DiseaseArg::Parkinsons   => DiseaseCase::Parkinsons,
            DiseaseArg::LungCancer   => DiseaseCase::LungCancer,
            DiseaseArg::Thyroid      => DiseaseCase::Hypothyroid,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleArg {
    Positive,
    Negative,
}

impl From<SampleArg> for Preset {
    fn from(a: SampleArg) -> Self {
        match a {
            SampleArg::Positive => Preset::Positive,
            SampleArg::Negative => Preset::Negative,
        }
    }
}

#[derive(Args, Debug)]
pub struct DiseaseArgs {
    #[arg(value_enum)]
    pub disease: DiseaseArg,
}

/// Arguments for the `predict` command.
/// Without --sample or --interactive, fields not given with --set keep their defaults.
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(value_enum)]
    pub disease: DiseaseArg,

    /// Predict with the positive or negative sample instead of form data
    #[arg(long, value_enum, conflicts_with_all = ["set", "interactive"])]
    pub sample: Option<SampleArg>,

    /// Set one form field, e.g. --set Glucose=148 or --set sex=Male
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Prompt for every field on the terminal
    #[arg(long, conflicts_with = "set")]
    pub interactive: bool,
}

impl PredictArgs {
    /// Build form input from the --set pairs, checking each against its widget.
    pub fn form_input(&self) -> Result<FormInput> {
        let case = DiseaseCase::from(self.disease);
        let mut form = FormInput::new();
        for (key, raw) in &self.set {
            let field = schema::field(case, key).ok_or_else(|| {
                let keys: Vec<_> = schema::fields(case).iter().map(|f| f.key).collect();
                anyhow!("{case} has no field '{key}' (fields: {})", keys.join(", "))
            })?;
            form.insert(field.key, field.parse(raw)?);
        }
        Ok(form)
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
