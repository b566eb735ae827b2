// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the training stage in order:
//
//   Step 1: Read the four partition CSVs   (Layer 4 - data)
//   Step 2: Fit the classifier             (Layer 5 - ml)
//   Step 3: Predict the held-out test rows (Layer 5 - ml)
//   Step 4: Score accuracy                 (Layer 6 - infra)
//   Step 5: Save model.pkl                 (Layer 6 - infra)
//
// Any missing or inconsistent artifact stops the run before
// fitting; nothing is written in that case.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::partition_store::PartitionStore;
use crate::domain::traits::Classifier;
use crate::infra::{
    artifacts::ArtifactPaths,
    metrics::{accuracy, MetricsLogger},
    model_store::ModelStore,
};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run. The defaults are the
// fixed settings of the pipeline; flags only exist to make
// experiments possible without editing code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub artifact_dir:  String,
    pub epochs:        usize,
    pub batch_size:    usize,
    pub learning_rate: f64,
    pub seed:          u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            artifact_dir:  ".".to_string(),
            epochs:        200,
            batch_size:    16,
            learning_rate: 0.05,
            seed:          42,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            bail!("epochs must be at least 1");
        }
        if self.batch_size == 0 {
            bail!("batch size must be at least 1");
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            bail!("learning rate must be a positive number, got {}", self.learning_rate);
        }
        Ok(())
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Fraction of test rows predicted exactly right, in [0, 1]
    pub accuracy:   f64,
    pub train_rows: usize,
    pub test_rows:  usize,
    pub model_path: PathBuf,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the training stage end to end.
    pub fn execute(&self) -> Result<TrainReport> {
        let cfg = &self.config;
        cfg.validate()?;
        let paths = ArtifactPaths::new(&cfg.artifact_dir);

        // ── Step 1: Read partition artifacts ─────────────────────────────────
        let partition = PartitionStore::new(paths.clone()).load()?;
        tracing::info!(
            "Read {} train / {} test rows from '{}'",
            partition.train.n_rows(),
            partition.test.n_rows(),
            paths.dir().display()
        );

        // ── Step 2: Fit ───────────────────────────────────────────────────────
        let logger = MetricsLogger::create(paths.metrics())?;
        let model  = run_training(cfg, &partition.train, &logger)?;

        // ── Step 3 + 4: Evaluate on held-out rows ─────────────────────────────
        let predictions = model.predict(partition.test.features())?;
        let accuracy    = accuracy(&predictions, partition.test.target().values())?;
        tracing::info!("Test accuracy: {:.4}", accuracy);

        // ── Step 5: Persist ───────────────────────────────────────────────────
        let store = ModelStore::new(paths.model());
        store.save(&model)?;

        Ok(TrainReport {
            accuracy,
            train_rows: partition.train.n_rows(),
            test_rows:  partition.test.n_rows(),
            model_path: store.path().to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_epochs_or_batch_rejected() {
        let cfg = TrainConfig { epochs: 0, ..TrainConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = TrainConfig { batch_size: 0, ..TrainConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = TrainConfig { learning_rate: -1.0, ..TrainConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_missing_artifacts_fail_without_writing_model() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            artifact_dir: dir.path().to_string_lossy().into_owned(),
            ..TrainConfig::default()
        };

        assert!(TrainUseCase::new(cfg).execute().is_err());
        assert!(!ArtifactPaths::new(dir.path()).model().exists());
    }
}
