// ============================================================
// Layer 1 — Page and Result Rendering
// ============================================================
// Plain-text versions of the views: the home page, the info
// block above each disease form, the field listing and the
// result box. Everything writes to a generic Write so the same
// code serves stdout and tests.

use std::io::Write;

use anyhow::Result;

use crate::application::predict_use_case::Outcome;
use crate::data::schema;
use crate::domain::disease::DiseaseCase;

pub const APP_TITLE: &str = "Medical AI Diagnosis System";
pub const APP_SUBTITLE: &str = "Advanced disease prediction using machine learning";

fn rule(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    Ok(())
}

pub fn home(out: &mut impl Write) -> Result<()> {
    rule(out)?;
    writeln!(out, "{APP_TITLE}")?;
    writeln!(out, "{APP_SUBTITLE}")?;
    rule(out)?;
    writeln!(out, "\nWelcome to Medical AI Diagnosis\n")?;
    writeln!(out, "About This Application")?;
    writeln!(
        out,
        "  This application uses machine learning algorithms to predict the likelihood of five \
         common medical conditions based on patient data. The models have been trained on \
         medical datasets and can provide preliminary assessments.\n"
    )?;
    writeln!(out, "Available Disease Predictions")?;
    writeln!(out, "  - Diabetes: Predicts diabetes based on medical and demographic factors")?;
    writeln!(out, "  - Heart Disease: Evaluates the risk of coronary heart disease")?;
    writeln!(out, "  - Parkinson's Disease: Analyzes voice recordings for Parkinson's indicators")?;
    writeln!(out, "  - Lung Cancer: Assesses lung cancer risk based on symptoms and history")?;
    writeln!(out, "  - Hypo-Thyroid: Evaluates thyroid function and detects hypothyroidism\n")?;
    writeln!(out, "How to Use")?;
    writeln!(
        out,
        "  Select a disease, fill in the required information, and choose a prediction \
         action to get your result.\n"
    )?;
    writeln!(out, "Disclaimer")?;
    writeln!(
        out,
        "  This tool is for educational purposes only and does not replace professional \
         medical advice. Always consult with a healthcare provider for proper diagnosis \
         and treatment."
    )?;
    Ok(())
}

pub fn disease_info(out: &mut impl Write, case: DiseaseCase) -> Result<()> {
    let info = case.info();
    rule(out)?;
    writeln!(out, "{}", info.title)?;
    rule(out)?;
    writeln!(out, "Description\n  {}", info.description)?;
    writeln!(out, "Common Symptoms\n  {}", info.symptoms)?;
    writeln!(out, "Risk Factors\n  {}", info.risk_factors)?;
    Ok(())
}

/// List every field with its key, widget kind, domain and default.
pub fn form_fields(out: &mut impl Write, case: DiseaseCase) -> Result<()> {
    writeln!(out, "{} ({} fields, in model order)", case.form_heading(), schema::fields(case).len())?;
    for (i, field) in schema::fields(case).iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<24} {:<7} {:<40} default {}",
            i + 1,
            field.key,
            field.widget.kind(),
            field.widget.domain(),
            field.default_value(),
        )?;
        writeln!(out, "     {}: {}", field.label, field.help)?;
    }
    Ok(())
}

/// The result box: exactly one canned message, or the error text.
pub fn outcome(out: &mut impl Write, outcome: &Outcome) -> Result<()> {
    writeln!(out)?;
    rule(out)?;
    match outcome {
        Outcome::Verdict { message, .. } => writeln!(out, "{message}")?,
        Outcome::Failed(text) => writeln!(out, "ERROR: {text}")?,
    }
    rule(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_home_lists_every_case() {
        let text = render(|out| home(out));
        assert!(text.contains(APP_TITLE));
        for name in ["Diabetes", "Heart Disease", "Parkinson's", "Lung Cancer", "Hypo-Thyroid"] {
            assert!(text.contains(name), "{name}");
        }
        assert!(text.contains("Disclaimer"));
    }

    #[test]
    fn test_info_page() {
        let text = render(|out| disease_info(out, DiseaseCase::LungCancer));
        assert!(text.contains("Lung Cancer Prediction"));
        assert!(text.contains("Risk Factors"));
    }

    #[test]
    fn test_form_listing_keeps_order() {
        let text = render(|out| form_fields(out, DiseaseCase::Hypothyroid));
        let age = text.find("age").unwrap();
        let tt4 = text.find("tt4").unwrap();
        assert!(age < tt4);
        assert!(text.contains("Female | Male"));
    }

    #[test]
    fn test_outcome_shows_one_message() {
        let m = DiseaseCase::Diabetes.messages();
        let text = render(|out| outcome(out, &Outcome::Verdict { label: 1, message: m.positive }));
        assert!(text.contains(m.positive));
        assert!(!text.contains(m.negative));

        let text = render(|out| outcome(out, &Outcome::Failed("An error occurred: boom".into())));
        assert!(text.contains("An error occurred: boom"));
    }
}
