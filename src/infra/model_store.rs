// ============================================================
// Layer 6 — Model Store
// ============================================================
// Reads and writes the five model artifacts with Burn's
// CompactRecorder.
//
// What makes up one artifact:
//   1. <stem>.json    — manifest: disease key + layer widths
//   2. <stem>.mpk     — model weights (named MessagePack)
//
// The manifest is needed to rebuild the exact architecture
// before the weights can be loaded into it.
//
// File layout (stems are fixed per disease case):
//   Models/
//     diabetes_model.json       diabetes_model.mpk
//     heart_disease_model.json  heart_disease_model.mpk
//     parkinsons_model.json     parkinsons_model.mpk
//     lungs_disease_model.json  lungs_disease_model.mpk
//     Thyroid_model.json        Thyroid_model.mpk
//
// Reference: Burn Book §6 (Records)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::{Deserialize, Serialize};

use crate::domain::disease::DiseaseCase;
use crate::ml::model::{DiseaseClassifier, DiseaseClassifierConfig};

/// Architecture description stored next to the weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Key of the disease case this artifact was produced for
    pub disease:    String,
    /// Number of features the model takes
    pub input_dim:  usize,
    pub hidden_dim: usize,
}

impl ModelManifest {
    pub fn new(case: DiseaseCase, cfg: &DiseaseClassifierConfig) -> Self {
        Self {
            disease:    case.key().to_string(),
            input_dim:  cfg.input_dim,
            hidden_dim: cfg.hidden_dim,
        }
    }

    pub fn config(&self) -> DiseaseClassifierConfig {
        DiseaseClassifierConfig::new(self.input_dim).with_hidden_dim(self.hidden_dim)
    }
}

/// Maps disease cases to artifact files inside one directory.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Weight file path without extension; the recorder appends `.mpk`.
    pub fn weights_path(&self, case: DiseaseCase) -> PathBuf {
        self.dir.join(case.model_stem())
    }

    pub fn manifest_path(&self, case: DiseaseCase) -> PathBuf {
        self.dir.join(format!("{}.json", case.model_stem()))
    }

    /// Write an artifact for `case`, creating the directory if needed.
    pub fn save<B: Backend>(
        &self,
        case:  DiseaseCase,
        cfg:   &DiseaseClassifierConfig,
        model: &DiseaseClassifier<B>,
    ) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let manifest_path = self.manifest_path(case);
        let json = serde_json::to_string_pretty(&ModelManifest::new(case, cfg))?;
        fs::write(&manifest_path, json)
            .with_context(|| format!("Cannot write manifest '{}'", manifest_path.display()))?;

        let path = self.weights_path(case);
        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save model to '{}'", path.display()))?;

        tracing::debug!("Saved {} model to '{}'", case, path.display());
        Ok(())
    }

    /// Read the manifest of `case`.
    pub fn load_manifest(&self, case: DiseaseCase) -> Result<ModelManifest> {
        let path = self.manifest_path(case);
        let json = fs::read_to_string(&path).with_context(|| {
            format!("Cannot read model manifest '{}'", path.display())
        })?;
        let manifest: ModelManifest = serde_json::from_str(&json)
            .with_context(|| format!("Malformed model manifest '{}'", path.display()))?;

        match DiseaseCase::from_key(&manifest.disease) {
            Some(found) if found == case => Ok(manifest),
            Some(found) => bail!(
                "'{}' belongs to the {} model, expected {}",
                path.display(),
                found,
                case
            ),
            None => bail!(
                "'{}' names an unknown disease '{}'",
                path.display(),
                manifest.disease
            ),
        }
    }

    /// Rebuild the model of `case` and restore its weights.
    pub fn load<B: Backend>(
        &self,
        case:   DiseaseCase,
        device: &B::Device,
    ) -> Result<DiseaseClassifier<B>> {
        let manifest = self.load_manifest(case)?;
        let model: DiseaseClassifier<B> = manifest.config().init(device);

        let path = self.weights_path(case);
        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| format!("Cannot load model weights '{}'", path.display()))?;

        Ok(model.load_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::inferencer::{InferBackend, InferDevice};

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("Models"));
        let device = InferDevice::default();
        let cfg = DiseaseClassifierConfig::new(7).with_hidden_dim(4);
        let model = cfg.init::<InferBackend>(&device);

        store.save(DiseaseCase::Hypothyroid, &cfg, &model).unwrap();
        assert!(dir.path().join("Models/Thyroid_model.json").exists());
        assert!(dir.path().join("Models/Thyroid_model.mpk").exists());
        assert!(!dir.path().join("Models/Thyroid_model.mpk.gz").exists());

        let manifest = store.load_manifest(DiseaseCase::Hypothyroid).unwrap();
        assert_eq!(manifest.input_dim, 7);
        assert_eq!(manifest.hidden_dim, 4);

        let loaded = store.load::<InferBackend>(DiseaseCase::Hypothyroid, &device).unwrap();
        assert_eq!(loaded.input_dim, 7);
    }

    #[test]
    fn test_missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let device = InferDevice::default();
        let err = store.load::<InferBackend>(DiseaseCase::Diabetes, &device).unwrap_err();
        assert!(err.to_string().contains("diabetes_model.json"));
    }

    #[test]
    fn test_manifest_for_other_case_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let manifest = ModelManifest {
            disease:    "diabetes".into(),
            input_dim:  8,
            hidden_dim: 16,
        };
        fs::write(
            store.manifest_path(DiseaseCase::Parkinsons),
            serde_json::to_string(&manifest).unwrap(),
        )
        .unwrap();
        let err = store.load_manifest(DiseaseCase::Parkinsons).unwrap_err();
        assert!(err.to_string().contains("belongs to the Diabetes model"));
    }

    #[test]
    fn test_manifest_with_unknown_disease_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        fs::write(
            store.manifest_path(DiseaseCase::Diabetes),
            r#"{"disease":"flu","input_dim":8,"hidden_dim":16}"#,
        )
        .unwrap();
        let err = store.load_manifest(DiseaseCase::Diabetes).unwrap_err();
        assert!(err.to_string().contains("unknown disease 'flu'"));
    }

    #[test]
    fn test_every_case_writes_its_documented_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let device = InferDevice::default();
        let cfg = DiseaseClassifierConfig::new(3);
        let model = cfg.init::<InferBackend>(&device);
        for case in DiseaseCase::ALL {
            store.save(case, &cfg, &model).unwrap();
            let stem = case.model_stem();
            assert!(dir.path().join(format!("{stem}.json")).exists(), "{case}");
            assert!(dir.path().join(format!("{stem}.mpk")).exists(), "{case}");
        }
    }
}
