// ============================================================
// Layer 6 — Metrics
// ============================================================
// Two things live here:
//
//   accuracy()     — fraction of predictions that exactly
//                    equal the true label. Always in [0, 1].
//
//   MetricsLogger  — writes one CSV row per training epoch so
//                    a learning curve can be plotted later.
//
// Example train_metrics.csv:
//   epoch,train_loss
//   1,1.021337
//   2,0.874512
//   ...
//
// The loss should fall steadily; a flat or rising curve means
// the learning rate is too high or the data is mislabelled.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::table::Label;

/// Fraction of positions where `predicted` equals `actual`.
///
/// Fails on empty input or mismatched lengths rather than
/// returning a meaningless number.
pub fn accuracy(predicted: &[Label], actual: &[Label]) -> Result<f64> {
    if predicted.len() != actual.len() {
        bail!(
            "cannot score {} predictions against {} labels",
            predicted.len(),
            actual.len()
        );
    }
    if actual.is_empty() {
        bail!("cannot compute accuracy over zero samples");
    }
    let correct = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    Ok(correct as f64 / actual.len() as f64)
}

/// One row of the training log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Mean cross-entropy over the epoch's mini-batches
    pub train_loss: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, train_loss: f64) -> Self {
        Self { epoch, train_loss }
    }
}

/// Appends epoch metrics to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create (or truncate) the log and write the header row.
    /// Each training run starts with a fresh file.
    pub fn create(csv_path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = csv_path.into();
        if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "epoch,train_loss")?;
        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one epoch as a new row.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;
        writeln!(f, "{},{:.6}", m.epoch, m.train_loss)?;

        tracing::debug!("epoch {} train_loss={:.4}", m.epoch, m.train_loss);
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
