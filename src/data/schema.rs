// ============================================================
// Layer 4 — Form Schemas and Lookup Tables
// ============================================================
// The ordered field list of every disease case. Field order is
// the column order each model artifact was trained on and must
// only change together with the artifact.
//
// Categorical fields point at one of the lookup tables below.
// The tables are declared once and shared, so "Male" maps to 1
// on every form that asks for sex.

use crate::domain::disease::DiseaseCase;
use crate::domain::field::{Choice, FieldDescriptor, Widget};

// ─── Lookup tables ────────────────────────────────────────────────────────────

pub const SEX: &[Choice] = &[Choice::new("Female", 0), Choice::new("Male", 1)];

pub const YES_NO: &[Choice] = &[Choice::new("No", 0), Choice::new("Yes", 1)];

pub const CHEST_PAIN: &[Choice] = &[
    Choice::new("Typical Angina", 0),
    Choice::new("Atypical Angina", 1),
    Choice::new("Non-anginal Pain", 2),
    Choice::new("Asymptomatic", 3),
];

pub const RESTING_ECG: &[Choice] = &[
    Choice::new("Normal", 0),
    Choice::new("ST-T Wave Abnormality", 1),
    Choice::new("Left Ventricular Hypertrophy", 2),
];

pub const ST_SLOPE: &[Choice] = &[
    Choice::new("Upsloping", 0),
    Choice::new("Flat", 1),
    Choice::new("Downsloping", 2),
];

pub const THALASSEMIA: &[Choice] = &[
    Choice::new("Normal", 0),
    Choice::new("Fixed Defect", 1),
    Choice::new("Reversible Defect", 2),
];

// ─── Widget shorthands ────────────────────────────────────────────────────────

const fn slider(min: f64, max: f64) -> Widget {
    Widget::Slider { min, max, step: 0.1 }
}

const fn whole(min: f64, max: f64) -> Widget {
    Widget::Number { min, max, integer: true }
}

const fn decimal(min: f64, max: f64) -> Widget {
    Widget::Number { min, max, integer: false }
}

const fn select(options: &'static [Choice]) -> Widget {
    Widget::Select { options }
}

const fn yes_no(key: &'static str, label: &'static str, help: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(key, label, help, select(YES_NO))
}

// ─── Field lists ──────────────────────────────────────────────────────────────

pub const DIABETES_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Pregnancies", "Number of Pregnancies", "Number of times pregnant", whole(0.0, 20.0)),
    FieldDescriptor::new("Glucose", "Glucose Level", "Plasma glucose concentration (mg/dL)", slider(0.0, 200.0)),
    FieldDescriptor::new("BloodPressure", "Blood Pressure", "Diastolic blood pressure (mm Hg)", slider(0.0, 122.0)),
    FieldDescriptor::new("SkinThickness", "Skin Thickness", "Triceps skin fold thickness (mm)", slider(0.0, 100.0)),
    FieldDescriptor::new("Insulin", "Insulin Level", "2-Hour serum insulin (mu U/ml)", whole(0.0, 846.0)),
    FieldDescriptor::new("BMI", "BMI value", "Body Mass Index (weight in kg/(height in m)²)", slider(0.0, 67.1)),
    FieldDescriptor::new("DiabetesPedigreeFunction", "Diabetes Pedigree Function", "Diabetes pedigree function (genetic influence)", slider(0.078, 2.42)),
    FieldDescriptor::new("Age", "Age", "Age in years", slider(21.0, 81.0)),
];

pub const HEART_DISEASE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("age", "Age", "Age in years", slider(20.0, 100.0)),
    FieldDescriptor::new("sex", "Sex", "Gender of the person", select(SEX)),
    FieldDescriptor::new("cp", "Chest Pain Type", "Type of chest pain experienced", select(CHEST_PAIN)),
    FieldDescriptor::new("trestbps", "Resting Blood Pressure", "Resting blood pressure (mm Hg)", slider(90.0, 200.0)),
    FieldDescriptor::new("chol", "Serum Cholesterol", "Serum cholesterol (mg/dl)", slider(100.0, 600.0)),
    yes_no("fbs", "Fasting Blood Sugar", "Fasting blood sugar > 120 mg/dl"),
    FieldDescriptor::new("restecg", "Resting ECG", "Resting electrocardiographic results", select(RESTING_ECG)),
    FieldDescriptor::new("thalach", "Max Heart Rate", "Maximum heart rate achieved", slider(70.0, 220.0)),
    yes_no("exang", "Exercise Induced Angina", "Exercise induced angina"),
    FieldDescriptor::new("oldpeak", "ST Depression", "ST depression induced by exercise relative to rest", slider(0.0, 6.2)),
    FieldDescriptor::new("slope", "Slope of ST Segment", "Slope of the peak exercise ST segment", select(ST_SLOPE)),
    FieldDescriptor::new("ca", "Number of Major Vessels", "Number of major vessels colored by fluoroscopy", slider(0.0, 3.0)),
    FieldDescriptor::new("thal", "Thalassemia", "Type of thalassemia", select(THALASSEMIA)),
];

pub const PARKINSONS_FIELDS: &[FieldDescriptor] = &[
    // Frequency measures
    FieldDescriptor::new("fo", "MDVP:Fo(Hz)", "Average vocal fundamental frequency", whole(80.0, 260.0)),
    FieldDescriptor::new("fhi", "MDVP:Fhi(Hz)", "Maximum vocal fundamental frequency", whole(100.0, 600.0)),
    FieldDescriptor::new("flo", "MDVP:Flo(Hz)", "Minimum vocal fundamental frequency", whole(60.0, 240.0)),
    // Jitter & shimmer
    FieldDescriptor::new("Jitter_percent", "MDVP:Jitter(%)", "Frequency variation measure (percentage)", decimal(0.0, 1.0)),
    FieldDescriptor::new("Jitter_Abs", "MDVP:Jitter(Abs)", "Absolute jitter in microseconds", decimal(0.0, 0.01)),
    FieldDescriptor::new("RAP", "MDVP:RAP", "Relative amplitude perturbation", decimal(0.0, 0.05)),
    FieldDescriptor::new("PPQ", "MDVP:PPQ", "Five-point period perturbation quotient", decimal(0.0, 0.05)),
    FieldDescriptor::new("DDP", "Jitter:DDP", "Average absolute difference of differences of consecutive periods", decimal(0.0, 0.1)),
    FieldDescriptor::new("Shimmer", "MDVP:Shimmer", "Amplitude variation measure", decimal(0.0, 0.2)),
    FieldDescriptor::new("Shimmer_dB", "MDVP:Shimmer(dB)", "Shimmer in decibels", decimal(0.0, 2.0)),
    FieldDescriptor::new("APQ3", "Shimmer:APQ3", "Three-point amplitude perturbation quotient", decimal(0.0, 0.05)),
    FieldDescriptor::new("APQ5", "Shimmer:APQ5", "Five-point amplitude perturbation quotient", decimal(0.0, 0.1)),
    FieldDescriptor::new("APQ", "MDVP:APQ", "Amplitude perturbation quotient", decimal(0.0, 0.15)),
    FieldDescriptor::new("DDA", "Shimmer:DDA", "Average absolute differences of consecutive differences", decimal(0.0, 0.15)),
    // Other measures
    FieldDescriptor::new("NHR", "NHR", "Noise-to-harmonics ratio", decimal(0.0, 0.5)),
    FieldDescriptor::new("HNR", "HNR", "Harmonics-to-noise ratio", decimal(0.0, 35.0)),
    FieldDescriptor::new("RPDE", "RPDE", "Recurrence period density entropy", decimal(0.0, 1.0)),
    FieldDescriptor::new("DFA", "DFA", "Detrended fluctuation analysis", decimal(0.0, 1.0)),
    FieldDescriptor::new("spread1", "Spread1", "Nonlinear measure of fundamental frequency variation", decimal(-10.0, 10.0)),
    FieldDescriptor::new("spread2", "Spread2", "Nonlinear measure of fundamental frequency variation", decimal(0.0, 1.0)),
    FieldDescriptor::new("D2", "D2", "Correlation dimension", decimal(0.0, 5.0)),
    FieldDescriptor::new("PPE", "PPE", "Pitch period entropy", decimal(0.0, 1.0)),
];

pub const LUNG_CANCER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("GENDER", "Gender", "Gender of the person", select(SEX)),
    FieldDescriptor::new("AGE", "Age", "Age in years", slider(1.0, 100.0)),
    yes_no("SMOKING", "Smoking", "Does the person smoke?"),
    yes_no("YELLOW_FINGERS", "Yellow Fingers", "Does the person have yellow fingers?"),
    yes_no("ANXIETY", "Anxiety", "Does the person have anxiety?"),
    yes_no("PEER_PRESSURE", "Peer Pressure", "Is the person under peer pressure?"),
    yes_no("CHRONIC_DISEASE", "Chronic Disease", "Does the person have a chronic disease?"),
    yes_no("FATIGUE", "Fatigue", "Does the person experience fatigue?"),
    yes_no("ALLERGY", "Allergy", "Does the person have allergies?"),
    yes_no("WHEEZING", "Wheezing", "Does the person experience wheezing?"),
    yes_no("ALCOHOL_CONSUMING", "Alcohol Consuming", "Does the person consume alcohol?"),
    yes_no("COUGHING", "Coughing", "Does the person experience coughing?"),
    yes_no("SHORTNESS_OF_BREATH", "Shortness Of Breath", "Does the person experience shortness of breath?"),
    yes_no("SWALLOWING_DIFFICULTY", "Swallowing Difficulty", "Does the person have difficulty swallowing?"),
    yes_no("CHEST_PAIN", "Chest Pain", "Does the person experience chest pain?"),
];

pub const THYROID_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("age", "Age", "Age in years", slider(1.0, 100.0)),
    FieldDescriptor::new("sex", "Gender", "Gender of the person", select(SEX)),
    yes_no("on_thyroxine", "On Thyroxine", "Is the person on thyroxine medication?"),
    FieldDescriptor::new("tsh", "TSH Level", "Thyroid Stimulating Hormone level", decimal(0.005, 500.0)),
    yes_no("t3_measured", "T3 Measured", "Was T3 hormone measured?"),
    FieldDescriptor::new("t3", "T3 Level", "Triiodothyronine hormone level", decimal(0.0, 10.0)),
    FieldDescriptor::new("tt4", "TT4 Level", "Total Thyroxine level", decimal(0.0, 500.0)),
];

/// The ordered field list of a disease case.
pub fn fields(case: DiseaseCase) -> &'static [FieldDescriptor] {
    match case {
        DiseaseCase::Diabetes     => DIABETES_FIELDS,
        DiseaseCase::HeartDisease => HEART_DISEASE_FIELDS,
        DiseaseCase::Parkinsons   => PARKINSONS_FIELDS,
        DiseaseCase::LungCancer   => LUNG_CANCER_FIELDS,
        DiseaseCase::Hypothyroid  => THYROID_FIELDS,
    }
}

/// Find a field of a case by key.
pub fn field(case: DiseaseCase, key: &str) -> Option<&'static FieldDescriptor> {
    fields(case).iter().find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(case: DiseaseCase) -> Vec<&'static str> {
        fields(case).iter().map(|f| f.key).collect()
    }

    #[test]
    fn test_field_orders_match_model_columns() {
        assert_eq!(
            keys(DiseaseCase::Diabetes),
            vec!["Pregnancies", "Glucose", "BloodPressure", "SkinThickness",
                 "Insulin", "BMI", "DiabetesPedigreeFunction", "Age"]
        );
        assert_eq!(
            keys(DiseaseCase::HeartDisease),
            vec!["age", "sex", "cp", "trestbps", "chol", "fbs", "restecg",
                 "thalach", "exang", "oldpeak", "slope", "ca", "thal"]
        );
        assert_eq!(
            keys(DiseaseCase::Parkinsons),
            vec!["fo", "fhi", "flo", "Jitter_percent", "Jitter_Abs", "RAP", "PPQ",
                 "DDP", "Shimmer", "Shimmer_dB", "APQ3", "APQ5", "APQ", "DDA",
                 "NHR", "HNR", "RPDE", "DFA", "spread1", "spread2", "D2", "PPE"]
        );
        assert_eq!(
            keys(DiseaseCase::LungCancer),
            vec!["GENDER", "AGE", "SMOKING", "YELLOW_FINGERS", "ANXIETY",
                 "PEER_PRESSURE", "CHRONIC_DISEASE", "FATIGUE", "ALLERGY",
                 "WHEEZING", "ALCOHOL_CONSUMING", "COUGHING",
                 "SHORTNESS_OF_BREATH", "SWALLOWING_DIFFICULTY", "CHEST_PAIN"]
        );
        assert_eq!(
            keys(DiseaseCase::Hypothyroid),
            vec!["age", "sex", "on_thyroxine", "tsh", "t3_measured", "t3", "tt4"]
        );
    }

    #[test]
    fn test_keys_are_unique_per_case() {
        for case in DiseaseCase::ALL {
            let mut k = keys(case);
            let n = k.len();
            k.sort();
            k.dedup();
            assert_eq!(k.len(), n, "duplicate key in {case}");
        }
    }

    #[test]
    fn test_lookup_tables_have_dense_codes() {
        for table in [SEX, YES_NO, CHEST_PAIN, RESTING_ECG, ST_SLOPE, THALASSEMIA] {
            for (i, choice) in table.iter().enumerate() {
                assert_eq!(choice.code as usize, i);
            }
        }
    }

    #[test]
    fn test_field_lookup() {
        let f = field(DiseaseCase::HeartDisease, "cp").unwrap();
        assert_eq!(f.label, "Chest Pain Type");
        assert!(field(DiseaseCase::HeartDisease, "Glucose").is_none());
    }
}
