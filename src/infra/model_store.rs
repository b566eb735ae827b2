// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the fitted classifier as ONE binary file
// (model.pkl by default).
//
// What gets saved:
//   ModelArtifact {
//     format_version  — bumped whenever FittedModel's layout changes
//     model           — feature schema, class set, weights, bias
//   }
//
// The feature schema travels with the weights, so the serving
// process can rebuild and validate requests without reading
// any of the training CSVs.
//
// Encoding is bincode with a size limit: a corrupt or truncated
// file fails to decode instead of triggering a huge allocation.
//
// Reference: Rust Book §9 (Error Handling)
//            bincode crate documentation

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::ml::inferencer::FittedModel;

/// Layout version written into every artifact.
pub const MODEL_FORMAT_VERSION: u32 = 1;

// Far above any iris-sized model; only guards against garbage input
const MAX_ARTIFACT_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Serialize, Deserialize)]
struct ModelArtifact<M> {
    format_version: u32,
    model:          M,
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_ARTIFACT_BYTES)
}

/// Reads and writes the model artifact at a fixed path.
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialise `model` and overwrite the artifact.
    pub fn save(&self, model: &FittedModel) -> Result<()> {
        let artifact = ModelArtifact {
            format_version: MODEL_FORMAT_VERSION,
            model,
        };
        let bytes = codec()
            .serialize(&artifact)
            .context("Failed to encode model artifact")?;

        fs::write(&self.path, &bytes)
            .with_context(|| format!("Cannot write model to '{}'", self.path.display()))?;

        tracing::debug!(
            "Saved model artifact '{}' ({} bytes)",
            self.path.display(),
            bytes.len()
        );
        Ok(())
    }

    /// Load the artifact written by `save`.
    ///
    /// Fails if the file is missing, cannot be decoded, or was
    /// written with a different format version.
    pub fn load(&self) -> Result<FittedModel> {
        let bytes = fs::read(&self.path).with_context(|| {
            format!(
                "Cannot read model from '{}'. Have you run train-model first?",
                self.path.display()
            )
        })?;

        let artifact: ModelArtifact<FittedModel> = codec()
            .deserialize(&bytes)
            .with_context(|| format!("'{}' is not a valid model artifact", self.path.display()))?;

        if artifact.format_version != MODEL_FORMAT_VERSION {
            bail!(
                "'{}' has format version {}, expected {}",
                self.path.display(),
                artifact.format_version,
                MODEL_FORMAT_VERSION
            );
        }

        tracing::debug!("Loaded model artifact '{}'", self.path.display());
        Ok(artifact.model)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    fn tiny_model() -> FittedModel {
        FittedModel::new(
            vec!["x".to_string(), "y".to_string()],
            vec![0, 1],
            array![[1.0, -1.0], [0.5, 0.25]],
            Array1::from(vec![0.0, 0.1]),
        )
        .unwrap()
    }

    #[test]
    fn test_save_then_load_returns_same_model() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.pkl"));
        let model = tiny_model();

        store.save(&model).unwrap();
        assert_eq!(store.load().unwrap(), model);
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.pkl"));
        assert!(store.load().is_err());
    }

    #[test]
    fn test_corrupt_artifact_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pkl");
        fs::write(&path, b"definitely not a model").unwrap();
        assert!(ModelStore::new(path).load().is_err());
    }

    #[test]
    fn test_truncated_artifact_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.pkl"));
        store.save(&tiny_model()).unwrap();

        let bytes = fs::read(store.path()).unwrap();
        fs::write(store.path(), &bytes[..bytes.len() / 2]).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_unknown_format_version_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pkl");
        let artifact = ModelArtifact {
            format_version: MODEL_FORMAT_VERSION + 1,
            model:          tiny_model(),
        };
        fs::write(&path, codec().serialize(&artifact).unwrap()).unwrap();

        let err = ModelStore::new(path).load().unwrap_err();
        assert!(err.to_string().contains("format version"));
    }

    /// Same field layout as FittedModel, with no dimension checks.
    #[derive(Serialize)]
    struct UncheckedModel {
        feature_names: Vec<String>,
        classes:       Vec<i64>,
        weights:       ndarray::Array2<f32>,
        bias:          Array1<f32>,
    }

    fn write_unchecked(path: &Path, model: UncheckedModel) {
        let artifact = ModelArtifact {
            format_version: MODEL_FORMAT_VERSION,
            model,
        };
        fs::write(path, codec().serialize(&artifact).unwrap()).unwrap();
    }

    #[test]
    fn test_decodable_artifact_with_mismatched_shapes_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pkl");
        write_unchecked(
            &path,
            UncheckedModel {
                feature_names: vec!["x".to_string(), "y".to_string()],
                classes:       vec![0],
                weights:       ndarray::Array2::zeros((3, 2)),
                bias:          Array1::zeros(2),
            },
        );

        let err = ModelStore::new(path).load().unwrap_err();
        assert!(format!("{err:#}").contains("weights have 3 rows"), "{err:#}");
    }

    #[test]
    fn test_artifact_without_classes_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pkl");
        write_unchecked(
            &path,
            UncheckedModel {
                feature_names: vec!["x".to_string()],
                classes:       vec![],
                weights:       ndarray::Array2::zeros((1, 0)),
                bias:          Array1::zeros(0),
            },
        );
        assert!(ModelStore::new(path).load().is_err());
    }
}
