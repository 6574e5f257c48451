// ============================================================
// Layer 4 — Sample Presets
// ============================================================
// Two literal feature vectors per disease case, used by the
// "Load & Predict with ... Sample" actions. They are already in
// model column order, so they skip the form and the assembler.

use crate::domain::disease::DiseaseCase;
use crate::domain::prediction::FeatureVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Positive,
    Negative,
}

const DIABETES_POSITIVE: &[f64] = &[6.0, 148.0, 72.0, 35.0, 155.0, 33.6, 0.627, 50.0];
const DIABETES_NEGATIVE: &[f64] = &[1.0, 85.0, 66.0, 29.0, 85.0, 26.6, 0.351, 31.0];

// age, sex, cp, trestbps, chol, fbs, restecg, thalach, exang, oldpeak, slope, ca, thal
const HEART_POSITIVE: &[f64] = &[65.0, 1.0, 3.0, 160.0, 280.0, 0.0, 2.0, 130.0, 1.0, 3.1, 2.0, 2.0, 2.0];
const HEART_NEGATIVE: &[f64] = &[40.0, 0.0, 1.0, 120.0, 180.0, 0.0, 0.0, 178.0, 0.0, 0.8, 0.0, 0.0, 0.0];

const PARKINSONS_POSITIVE: &[f64] = &[
    119.992, 157.302, 74.997,
    0.00662, 0.00004, 0.00401, 0.00317, 0.01204,
    0.04374, 0.42600, 0.02182, 0.03130, 0.02971, 0.06545,
    0.02211, 21.033, 0.525867, 0.741751, -6.759571, 0.162699, 2.103956, 0.210859,
];
const PARKINSONS_NEGATIVE: &[f64] = &[
    169.571, 193.516, 140.394,
    0.00370, 0.00002, 0.00168, 0.00215, 0.00503,
    0.01227, 0.10628, 0.00558, 0.00695, 0.00781, 0.01675,
    0.00458, 26.775, 0.425493, 0.580295, -5.288332, 0.122535, 1.657522, 0.125272,
];

const LUNG_POSITIVE: &[f64] = &[1.0, 65.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
const LUNG_NEGATIVE: &[f64] = &[0.0, 35.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

// age, sex, on_thyroxine, tsh, t3_measured, t3, tt4
const THYROID_POSITIVE: &[f64] = &[60.0, 0.0, 0.0, 45.0, 1.0, 0.8, 40.0];
const THYROID_NEGATIVE: &[f64] = &[35.0, 0.0, 0.0, 1.5, 1.0, 2.0, 110.0];

impl Preset {
    /// Label of the button that triggers this preset.
    pub fn action_label(self) -> &'static str {
        match self {
            Preset::Positive => "Load & Predict with Positive Sample",
            Preset::Negative => "Load & Predict with Negative Sample",
        }
    }

    pub fn values(self, case: DiseaseCase) -> &'static [f64] {
        match (case, self) {
            (DiseaseCase::Diabetes, Preset::Positive)     => DIABETES_POSITIVE,
            (DiseaseCase::Diabetes, Preset::Negative)     => DIABETES_NEGATIVE,
            (DiseaseCase::HeartDisease, Preset::Positive) => HEART_POSITIVE,
            (DiseaseCase::HeartDisease, Preset::Negative) => HEART_NEGATIVE,
            (DiseaseCase::Parkinsons, Preset::Positive)   => PARKINSONS_POSITIVE,
            (DiseaseCase::Parkinsons, Preset::Negative)   => PARKINSONS_NEGATIVE,
            (DiseaseCase::LungCancer, Preset::Positive)   => LUNG_POSITIVE,
            (DiseaseCase::LungCancer, Preset::Negative)   => LUNG_NEGATIVE,
            (DiseaseCase::Hypothyroid, Preset::Positive)  => THYROID_POSITIVE,
            (DiseaseCase::Hypothyroid, Preset::Negative)  => THYROID_NEGATIVE,
        }
    }

    pub fn vector(self, case: DiseaseCase) -> FeatureVector {
        FeatureVector::from(self.values(case))
    }
}
