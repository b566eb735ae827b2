// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates data preparation in order:
//
//   Step 1: Load the fixed dataset        (Layer 4 - data)
//   Step 2: Seeded 80/20 train/test split (Layer 4 - data)
//   Step 3: Write the four CSV artifacts  (Layer 4 - data)
//
// Nothing is returned that another stage consumes — only the
// files matter. The summary is for the CLI and for tests.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::IrisLoader,
    partition_store::PartitionStore,
    splitter::train_test_split,
};
use crate::domain::traits::DatasetSource;
use crate::infra::artifacts::ArtifactPaths;

// ─── Preparation Configuration ───────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub artifact_dir:  String,
    pub test_fraction: f64,
    pub seed:          u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            artifact_dir:  ".".to_string(),
            test_fraction: 0.2,
            seed:          42,
        }
    }
}

impl PrepareConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            bail!("test fraction must be between 0 and 1, got {}", self.test_fraction);
        }
        Ok(())
    }
}

/// Row counts of the partition that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareSummary {
    pub train_rows: usize,
    pub test_rows:  usize,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase<S: DatasetSource = IrisLoader> {
    config: PrepareConfig,
    source: S,
}

impl PrepareUseCase<IrisLoader> {
    /// Prepare the built-in iris dataset.
    pub fn new(config: PrepareConfig) -> Self {
        Self::with_source(config, IrisLoader::new())
    }
}

impl<S: DatasetSource> PrepareUseCase<S> {
    pub fn with_source(config: PrepareConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Execute the preparation stage end to end.
    pub fn execute(&self) -> Result<PrepareSummary> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let dataset = self.source.load()?;
        tracing::info!(
            "Loaded dataset: {} rows, {} features",
            dataset.n_rows(),
            dataset.features().n_cols()
        );

        // ── Step 2: Split ─────────────────────────────────────────────────────
        let partition = train_test_split(&dataset, cfg.test_fraction, cfg.seed)?;
        tracing::info!(
            "Split: {} train, {} test",
            partition.train.n_rows(),
            partition.test.n_rows()
        );

        // ── Step 3: Persist ───────────────────────────────────────────────────
        let paths = ArtifactPaths::new(&cfg.artifact_dir);
        PartitionStore::new(paths).save(&partition)?;

        Ok(PrepareSummary {
            train_rows: partition.train.n_rows(),
            test_rows:  partition.test.n_rows(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{Dataset, FeatureTable, LabelColumn};

    struct TenRows;

    impl DatasetSource for TenRows {
        fn load(&self) -> Result<Dataset> {
            let features = FeatureTable::new(
                vec!["x".to_string()],
                (0..10).map(|i| vec![i as f32]).collect(),
            )?;
            Dataset::new(features, LabelColumn::new("target", (0..10).map(|i| i % 2).collect()))
        }
    }

    fn config_in(dir: &std::path::Path) -> PrepareConfig {
        PrepareConfig {
            artifact_dir: dir.to_string_lossy().into_owned(),
            ..PrepareConfig::default()
        }
    }

    #[test]
    fn test_custom_source_is_split_and_written() {
        let dir     = tempfile::tempdir().unwrap();
        let summary = PrepareUseCase::with_source(config_in(dir.path()), TenRows)
            .execute()
            .unwrap();

        assert_eq!(summary, PrepareSummary { train_rows: 8, test_rows: 2 });
        let paths = ArtifactPaths::new(dir.path());
        for p in [paths.x_train(), paths.x_test(), paths.y_train(), paths.y_test()] {
            assert!(p.exists(), "{} missing", p.display());
        }
    }

    #[test]
    fn test_invalid_fraction_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PrepareConfig { test_fraction: 1.5, ..config_in(dir.path()) };

        assert!(PrepareUseCase::new(cfg).execute().is_err());
        assert!(!ArtifactPaths::new(dir.path()).x_train().exists());
    }

    #[test]
    fn test_unwritable_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(&dir.path().join("does/not/exist"));
        assert!(PrepareUseCase::new(cfg).execute().is_err());
    }
}
