// ============================================================
// Layer 3 — Feature Vectors and Results
// ============================================================
// FeatureVector is the ordered numeric input of one model call.
// ResultMessages holds the two canned texts of a disease case;
// `select` is the whole result-rendering decision.

/// Ordered numeric input for a single prediction.
/// Length and order are a contract with the model artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for FeatureVector {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

/// The positive / negative message pair of a disease case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMessages {
    pub positive: &'static str,
    pub negative: &'static str,
}

impl ResultMessages {
    pub const fn new(positive: &'static str, negative: &'static str) -> Self {
        Self { positive, negative }
    }

    /// Label 1 selects the positive message; every other label the negative one.
    pub fn select(&self, label: u8) -> &'static str {
        if label == 1 { self.positive } else { self.negative }
    }
}
