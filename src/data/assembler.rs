// ============================================================
// Layer 4 — Feature Assembler
// ============================================================
// Turns the raw values of one form into the FeatureVector the
// case's model expects:
//
//   for each field, in schema order:
//     missing value  → the widget's default
//     Number(v)      → v
//     Choice(label)  → code from the field's lookup table
//     Text(s)        → s parsed as a number
//
// Pure and deterministic: the same FormInput always produces
// the same vector.

use anyhow::{anyhow, bail, Result};

use crate::data::schema;
use crate::domain::disease::DiseaseCase;
use crate::domain::field::{FieldDescriptor, FormInput, RawValue, Widget};
use crate::domain::prediction::FeatureVector;

pub struct FeatureAssembler {
    case: DiseaseCase,
}

impl FeatureAssembler {
    pub fn new(case: DiseaseCase) -> Self {
        Self { case }
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        schema::fields(self.case)
    }

    /// Assemble the ordered vector for this case.
    pub fn assemble(&self, input: &FormInput) -> Result<FeatureVector> {
        let values = self
            .fields()
            .iter()
            .map(|field| {
                let raw = input
                    .get(field.key)
                    .cloned()
                    .unwrap_or_else(|| field.default_value());
                encode(field, &raw)
            })
            .collect::<Result<Vec<f64>>>()?;

        tracing::debug!("Assembled {} features for {}: {:?}", values.len(), self.case, values);
        Ok(FeatureVector::new(values))
    }
}

/// Encode one raw value as the number the model was trained on.
fn encode(field: &FieldDescriptor, raw: &RawValue) -> Result<f64> {
    match (raw, &field.widget) {
        (RawValue::Choice(label), Widget::Select { options }) => options
            .iter()
            .find(|c| c.label == label.as_str())
            .map(|c| f64::from(c.code))
            .ok_or_else(|| anyhow!("unknown option '{label}' for {}", field.key)),
        (RawValue::Choice(label), _) => {
            bail!("{} does not take options (got '{label}')", field.key)
        }
        (RawValue::Number(v), _) => Ok(*v),
        (RawValue::Text(s), _) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| anyhow!("could not convert string to float: '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::presets::Preset;

    fn choice(label: &str) -> RawValue {
        RawValue::Choice(label.to_string())
    }

    #[test]
    fn test_diabetes_positive_inputs() {
        let input = FormInput::new()
            .with("Pregnancies", RawValue::Number(6.0))
            .with("Glucose", RawValue::Number(148.0))
            .with("BloodPressure", RawValue::Number(72.0))
            .with("SkinThickness", RawValue::Number(35.0))
            .with("Insulin", RawValue::Number(155.0))
            .with("BMI", RawValue::Number(33.6))
            .with("DiabetesPedigreeFunction", RawValue::Number(0.627))
            .with("Age", RawValue::Number(50.0));
        let v = FeatureAssembler::new(DiseaseCase::Diabetes).assemble(&input).unwrap();
        assert_eq!(v.values(), &[6.0, 148.0, 72.0, 35.0, 155.0, 33.6, 0.627, 50.0]);
        assert_eq!(v, Preset::Positive.vector(DiseaseCase::Diabetes));
    }

    #[test]
    fn test_heart_sex_and_chest_pain_codes() {
        let asm = FeatureAssembler::new(DiseaseCase::HeartDisease);
        // Other selectors vary; sex and cp codes must not move.
        for (restecg, slope) in [("Normal", "Upsloping"), ("Left Ventricular Hypertrophy", "Flat")] {
            let input = FormInput::new()
                .with("sex", choice("Male"))
                .with("cp", choice("Asymptomatic"))
                .with("restecg", choice(restecg))
                .with("slope", choice(slope));
            let v = asm.assemble(&input).unwrap();
            assert_eq!(v.values()[1], 1.0);
            assert_eq!(v.values()[2], 3.0);
        }
    }

    #[test]
    fn test_sex_mapping_is_shared_across_forms() {
        for (case, key, index) in [
            (DiseaseCase::HeartDisease, "sex", 1),
            (DiseaseCase::LungCancer, "GENDER", 0),
            (DiseaseCase::Hypothyroid, "sex", 1),
        ] {
            let asm = FeatureAssembler::new(case);
            let male = asm.assemble(&FormInput::new().with(key, choice("Male"))).unwrap();
            let female = asm.assemble(&FormInput::new().with(key, choice("Female"))).unwrap();
            assert_eq!(male.values()[index], 1.0, "{case}");
            assert_eq!(female.values()[index], 0.0, "{case}");
        }
    }

    #[test]
    fn test_missing_fields_take_widget_defaults() {
        let v = FeatureAssembler::new(DiseaseCase::Hypothyroid)
            .assemble(&FormInput::new())
            .unwrap();
        // age slider min, Female, No, tsh min, No, t3 min, tt4 min
        assert_eq!(v.values(), &[1.0, 0.0, 0.0, 0.005, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vector_width_matches_schema() {
        for case in DiseaseCase::ALL {
            let asm = FeatureAssembler::new(case);
            let v = asm.assemble(&FormInput::new()).unwrap();
            assert_eq!(v.len(), asm.fields().len());
        }
    }

    #[test]
    fn test_unknown_option_fails() {
        let input = FormInput::new().with("cp", choice("Sharp"));
        let err = FeatureAssembler::new(DiseaseCase::HeartDisease)
            .assemble(&input)
            .unwrap_err();
        assert!(err.to_string().contains("Sharp"));
    }

    #[test]
    fn test_text_values_parse_as_numbers() {
        let asm = FeatureAssembler::new(DiseaseCase::Diabetes);
        let ok = asm
            .assemble(&FormInput::new().with("Glucose", RawValue::Text(" 120 ".into())))
            .unwrap();
        assert_eq!(ok.values()[1], 120.0);
        assert!(asm
            .assemble(&FormInput::new().with("Glucose", RawValue::Text("high".into())))
            .is_err());
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let input = FormInput::new()
            .with("GENDER", choice("Male"))
            .with("SMOKING", choice("Yes"))
            .with("AGE", RawValue::Number(52.0));
        let asm = FeatureAssembler::new(DiseaseCase::LungCancer);
        assert_eq!(asm.assemble(&input).unwrap(), asm.assemble(&input).unwrap());
    }
}
