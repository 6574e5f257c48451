// ============================================================
// Layer 3 — Disease Case
// ============================================================
// One of the five fixed prediction categories. Every case owns:
//   - a stable key (used in manifests and logs)
//   - the menu title shown in navigation
//   - the file stem of its model artifact
//   - an info page (description, symptoms, risk factors)
//   - the positive / negative result messages
//
// The field schema lives in the data layer (Layer 4) because
// it carries the categorical lookup tables.

use std::fmt;

use crate::domain::prediction::ResultMessages;

/// The five prediction categories, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiseaseCase {
    Diabetes,
    HeartDisease,
    Parkinsons,
    LungCancer,
    Hypothyroid,
}

/// Static text shown above a disease form.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseInfo {
    pub title:        &'static str,
    pub description:  &'static str,
    pub symptoms:     &'static str,
    pub risk_factors: &'static str,
}

impl DiseaseCase {
    pub const ALL: [DiseaseCase; 5] = [
        DiseaseCase::Diabetes,
        DiseaseCase::HeartDisease,
        DiseaseCase::Parkinsons,
        DiseaseCase::LungCancer,
        DiseaseCase::Hypothyroid,
    ];

    /// Stable identifier, written into model manifests.
    pub fn key(self) -> &'static str {
        match self {
            DiseaseCase::Diabetes     => "diabetes",
            DiseaseCase::HeartDisease => "heart_disease",
            DiseaseCase::Parkinsons   => "parkinsons",
            DiseaseCase::LungCancer   => "lung_cancer",
            DiseaseCase::Hypothyroid  => "thyroid",
        }
    }

    /// Look a case up by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Title used in the navigation menu.
    pub fn title(self) -> &'static str {
        match self {
            DiseaseCase::Diabetes     => "Diabetes",
            DiseaseCase::HeartDisease => "Heart Disease",
            DiseaseCase::Parkinsons   => "Parkinson's",
            DiseaseCase::LungCancer   => "Lung Cancer",
            DiseaseCase::Hypothyroid  => "Hypo-Thyroid",
        }
    }

    /// File stem of the model artifact inside the models directory.
    /// These names are fixed; artifacts are produced elsewhere.
    pub fn model_stem(self) -> &'static str {
        match self {
            DiseaseCase::Diabetes     => "diabetes_model",
            DiseaseCase::HeartDisease => "heart_disease_model",
            DiseaseCase::Parkinsons   => "parkinsons_model",
            DiseaseCase::LungCancer   => "lungs_disease_model",
            DiseaseCase::Hypothyroid  => "Thyroid_model",
        }
    }

    /// Heading shown above the form fields.
    pub fn form_heading(self) -> &'static str {
        match self {
            DiseaseCase::Parkinsons => "Enter Voice Recording Measurements",
            _                       => "Enter Patient Details",
        }
    }

    pub fn messages(self) -> ResultMessages {
        match self {
            DiseaseCase::Diabetes => ResultMessages::new(
                "POSITIVE: The analysis indicates diabetes. Please consult with a healthcare provider.",
                "NEGATIVE: The analysis does not indicate diabetes. Maintain a healthy lifestyle.",
            ),
            DiseaseCase::HeartDisease => ResultMessages::new(
                "POSITIVE: The analysis indicates heart disease. Please consult with a cardiologist.",
                "NEGATIVE: The analysis does not indicate heart disease. Maintain a healthy lifestyle.",
            ),
            DiseaseCase::Parkinsons => ResultMessages::new(
                "POSITIVE: The analysis indicates Parkinson's disease. Please consult with a neurologist.",
                "NEGATIVE: The analysis does not indicate Parkinson's disease.",
            ),
            DiseaseCase::LungCancer => ResultMessages::new(
                "POSITIVE: The analysis indicates a risk of lung cancer. Please consult with an oncologist immediately.",
                "NEGATIVE: The analysis does not indicate lung cancer. Maintain a healthy lifestyle.",
            ),
            DiseaseCase::Hypothyroid => ResultMessages::new(
                "POSITIVE: The analysis indicates Hypo-Thyroid disease. Please consult with an endocrinologist.",
                "NEGATIVE: The analysis does not indicate Hypo-Thyroid disease.",
            ),
        }
    }

    pub fn info(self) -> DiseaseInfo {
        match self {
            DiseaseCase::Diabetes => DiseaseInfo {
                title: "Diabetes Prediction",
                description: "Diabetes is a chronic disease that occurs when the pancreas is no longer able to make insulin, or when the body cannot make good use of the insulin it produces.",
                symptoms: "Frequent urination, increased thirst, extreme hunger, unexplained weight loss, fatigue, irritability, blurred vision, slow-healing sores.",
                risk_factors: "Family history, age, excess weight, physical inactivity, race, high blood pressure, abnormal cholesterol levels.",
            },
            DiseaseCase::HeartDisease => DiseaseInfo {
                title: "Heart Disease Prediction",
                description: "Heart disease refers to a range of conditions that affect your heart, including coronary artery disease, heart rhythm problems (arrhythmias), and congenital heart defects.",
                symptoms: "Chest pain, shortness of breath, pain in the neck, jaw, throat, upper abdomen or back, numbness, weakness, coldness in legs or arms.",
                risk_factors: "Age, sex, family history, smoking, poor diet, high blood pressure, high blood cholesterol, diabetes, obesity, physical inactivity, stress.",
            },
            DiseaseCase::Parkinsons => DiseaseInfo {
                title: "Parkinson's Disease Prediction",
                description: "Parkinson's disease is a progressive nervous system disorder that affects movement. Symptoms start gradually, sometimes with a barely noticeable tremor in just one hand.",
                symptoms: "Tremor, slowed movement, rigid muscles, impaired posture and balance, loss of automatic movements, speech changes, writing changes.",
                risk_factors: "Age, heredity, sex (men are more likely to develop Parkinson's disease than women), exposure to toxins, serious head injury.",
            },
            DiseaseCase::LungCancer => DiseaseInfo {
                title: "Lung Cancer Prediction",
                description: "Lung cancer is a type of cancer that begins in the lungs. It is the leading cause of cancer deaths worldwide.",
                symptoms: "Persistent cough, coughing up blood, chest pain, hoarseness, weight loss, shortness of breath, wheezing, weakness and fatigue.",
                risk_factors: "Smoking, exposure to secondhand smoke, exposure to radon gas, exposure to asbestos, family history of lung cancer.",
            },
            DiseaseCase::Hypothyroid => DiseaseInfo {
                title: "Hypo-Thyroid Prediction",
                description: "Hypothyroidism is a condition in which the thyroid gland doesn't produce enough thyroid hormone. It can cause various health problems if left untreated.",
                symptoms: "Fatigue, increased sensitivity to cold, constipation, dry skin, weight gain, puffy face, hoarseness, muscle weakness, elevated blood cholesterol level, muscle aches, pain, stiffness or weakness, heavier or irregular menstrual periods, thinning hair, slowed heart rate, depression, impaired memory.",
                risk_factors: "Autoimmune disease, thyroid surgery, radiation therapy, certain medications, pregnancy, congenital disease, pituitary disorder, iodine deficiency, age, sex (women are more likely to develop hypothyroidism).",
            },
        }
    }
}

impl fmt::Display for DiseaseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
