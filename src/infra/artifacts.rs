// ============================================================
// Layer 6 — Artifact Paths
// ============================================================
// The only contract between the three stages is a directory
// of files with fixed names:
//
//   <dir>/X_train.csv   ← prepare-data  → train-model
//   <dir>/X_test.csv    ← prepare-data  → train-model
//   <dir>/y_train.csv   ← prepare-data  → train-model
//   <dir>/y_test.csv    ← prepare-data  → train-model
//   <dir>/model.pkl     ← train-model   → serve-model
//
// The directory defaults to the current working directory.

use std::path::{Path, PathBuf};

pub const X_TRAIN_FILE: &str = "X_train.csv";
pub const X_TEST_FILE:  &str = "X_test.csv";
pub const Y_TRAIN_FILE: &str = "y_train.csv";
pub const Y_TEST_FILE:  &str = "y_test.csv";
pub const MODEL_FILE:   &str = "model.pkl";
pub const METRICS_FILE: &str = "train_metrics.csv";

/// Resolves artifact file names against one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    dir: PathBuf,
}

impl ArtifactPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn x_train(&self) -> PathBuf {
        self.dir.join(X_TRAIN_FILE)
    }

    pub fn x_test(&self) -> PathBuf {
        self.dir.join(X_TEST_FILE)
    }

    pub fn y_train(&self) -> PathBuf {
        self.dir.join(Y_TRAIN_FILE)
    }

    pub fn y_test(&self) -> PathBuf {
        self.dir.join(Y_TEST_FILE)
    }

    pub fn model(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn metrics(&self) -> PathBuf {
        self.dir.join(METRICS_FILE)
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
