// ============================================================
// Layer 1 — Interactive Navigation
// ============================================================
// The six views (Home + five disease forms) behind a numbered
// menu. A disease view shows its info block and offers the
// three form actions; "Predict with Current Data" walks
// through the form first.
//
// Each prediction is one linear pass and ends back at the menu,
// whether it produced a result or an error message.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::application::predict_use_case::{PredictUseCase, Trigger};
use crate::cli::{form::FormRenderer, render};
use crate::data::presets::Preset;
use crate::domain::disease::DiseaseCase;

const CURRENT_DATA: &str = "Predict with Current Data";

/// A selectable entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Disease(DiseaseCase),
}

impl View {
    pub fn all() -> Vec<View> {
        std::iter::once(View::Home)
            .chain(DiseaseCase::ALL.into_iter().map(View::Disease))
            .collect()
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Disease(case) => case.title(),
        }
    }
}

pub struct Navigator<'a, R, W> {
    form:     FormRenderer<R, W>,
    use_case: &'a PredictUseCase,
}

impl<'a, R: BufRead, W: Write> Navigator<'a, R, W> {
    pub fn new(input: R, output: W, use_case: &'a PredictUseCase) -> Self {
        Self { form: FormRenderer::new(input, output), use_case }
    }

    pub fn into_output(self) -> W {
        self.form.into_output()
    }

    /// Loop over the navigation menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let views = View::all();
        render::home(self.form.output())?;
        loop {
            let out = self.form.output();
            writeln!(out, "\nNavigation")?;
            for (i, view) in views.iter().enumerate() {
                writeln!(out, "  {}) {}", i + 1, view.title())?;
            }
            writeln!(out, "  0) Quit")?;
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = self.form.read_line()? else { break };
            if matches!(line.as_str(), "0" | "q" | "quit") {
                break;
            }
            let picked = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| views.get(i).copied());
            match picked {
                Some(View::Home) => render::home(self.form.output())?,
                Some(View::Disease(case)) => self.disease_view(case)?,
                None => writeln!(self.form.output(), "Unknown option '{line}'")?,
            }
        }
        Ok(())
    }

    fn disease_view(&mut self, case: DiseaseCase) -> Result<()> {
        let out = self.form.output();
        render::disease_info(out, case)?;
        writeln!(out, "\n  1) {}", Preset::Positive.action_label())?;
        writeln!(out, "  2) {}", Preset::Negative.action_label())?;
        writeln!(out, "  3) {CURRENT_DATA}")?;
        writeln!(out, "  0) Back")?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = self.form.read_line()? else { return Ok(()) };
        let trigger = match line.as_str() {
            "1" => Trigger::Sample(Preset::Positive),
            "2" => Trigger::Sample(Preset::Negative),
            "3" => match self.form.render_form(case) {
                Ok(input) => Trigger::Current(input),
                // Input ended mid-form: back to the menu, which then quits.
                Err(_) if self.form.is_closed() => return Ok(()),
                Err(e) => return Err(e),
            },
            _ => return Ok(()),
        };

        let outcome = self.use_case.execute(case, &trigger);
        render::outcome(self.form.output(), &outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::Classifier;
    use crate::ml::adapter::InferenceAdapter;
    use crate::ml::registry::ModelRegistry;
    use std::io::Cursor;

    /// Positive when the first feature is at least 5.
    struct Threshold;

    impl Classifier for Threshold {
        fn predict(&self, features: &[f64]) -> anyhow::Result<u8> {
            Ok(u8::from(features[0] >= 5.0))
        }
    }

    /// Rejects everything.
    struct Broken;

    impl Classifier for Broken {
        fn predict(&self, features: &[f64]) -> anyhow::Result<u8> {
            anyhow::bail!("X has {} features, but the model is expecting 3", features.len())
        }
    }

    fn use_case() -> PredictUseCase {
        let registry = ModelRegistry::new()
            .with_model(DiseaseCase::Diabetes, Box::new(Threshold))
            .with_model(DiseaseCase::HeartDisease, Box::new(Broken));
        PredictUseCase::new(InferenceAdapter::new(registry))
    }

    fn run(script: &str) -> String {
        let uc = use_case();
        let mut nav = Navigator::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), &uc);
        nav.run().unwrap();
        String::from_utf8(nav.into_output()).unwrap()
    }

    #[test]
    fn test_lists_six_views() {
        let views = View::all();
        assert_eq!(views.len(), 6);
        assert_eq!(views[0], View::Home);
        assert_eq!(views[5].title(), "Hypo-Thyroid");
    }

    #[test]
    fn test_positive_sample_from_menu() {
        let out = run("2\n1\n0\n");
        assert!(out.contains("Diabetes Prediction"));
        assert!(out.contains(DiseaseCase::Diabetes.messages().positive));
    }

    #[test]
    fn test_current_data_walks_the_form() {
        // Pregnancies = 2, remaining seven fields keep defaults.
        let script = format!("2\n3\n2\n{}0\n", "\n".repeat(7));
        let out = run(&script);
        assert!(out.contains("Enter Patient Details"));
        assert!(out.contains(DiseaseCase::Diabetes.messages().negative));
    }

    #[test]
    fn test_model_failure_keeps_the_menu_alive() {
        let out = run("3\n1\n2\n1\n0\n");
        assert!(out.contains("An error occurred: X has 13 features"));
        // Navigation continued to the diabetes view afterwards.
        assert!(out.contains(DiseaseCase::Diabetes.messages().positive));
    }

    #[test]
    fn test_input_ending_inside_a_form_returns_to_the_menu() {
        let uc = use_case();
        let script = "2\n3\n1\n";
        let mut nav = Navigator::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), &uc);
        assert!(nav.run().is_ok());
        let out = String::from_utf8(nav.into_output()).unwrap();
        assert!(out.contains("Enter Patient Details"));
        assert!(!out.contains(DiseaseCase::Diabetes.messages().positive));
        assert!(!out.contains(DiseaseCase::Diabetes.messages().negative));
    }

    #[test]
    fn test_unknown_option_and_eof() {
        let out = run("9\n");
        assert!(out.contains("Unknown option '9'"));
    }
}
