// ============================================================
// Layer 5 — Fitted Model (inference)
// ============================================================
// After training, the weights are copied out of the Burn module
// into plain ndarray matrices:
//
//   weights: [n_features, n_classes]
//   bias:    [n_classes]
//   logits = X · weights + bias        (X: [n_rows, n_features])
//   label  = classes[argmax(logits row)]
//
// A FittedModel owns no tensors or devices, so it is Send + Sync
// and can be shared by every request handler through an Arc with
// no locking. It is never mutated after construction.

use anyhow::{bail, Result};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::domain::table::{FeatureTable, Label};
use crate::domain::traits::Classifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFittedModel")]
pub struct FittedModel {
    feature_names: Vec<String>,
    classes:       Vec<Label>,
    weights:       Array2<f32>,
    bias:          Array1<f32>,
}

/// Decoded field by field, then checked by FittedModel::new.
#[derive(Deserialize)]
struct RawFittedModel {
    feature_names: Vec<String>,
    classes:       Vec<Label>,
    weights:       Array2<f32>,
    bias:          Array1<f32>,
}

impl TryFrom<RawFittedModel> for FittedModel {
    type Error = anyhow::Error;

    fn try_from(raw: RawFittedModel) -> Result<Self> {
        Self::new(raw.feature_names, raw.classes, raw.weights, raw.bias)
    }
}

impl FittedModel {
    /// Assemble a fitted model, checking that every dimension agrees.
    pub fn new(
        feature_names: Vec<String>,
        classes:       Vec<Label>,
        weights:       Array2<f32>,
        bias:          Array1<f32>,
    ) -> Result<Self> {
        if classes.is_empty() {
            bail!("a fitted model needs at least one class");
        }
        let (n_features, n_classes) = weights.dim();
        if n_features != feature_names.len() {
            bail!(
                "weights have {} rows but {} feature names were given",
                n_features,
                feature_names.len()
            );
        }
        if n_classes != classes.len() || bias.len() != classes.len() {
            bail!(
                "{} classes but weights have {} columns and bias has {} entries",
                classes.len(),
                n_classes,
                bias.len()
            );
        }
        if classes.windows(2).any(|w| w[0] >= w[1]) {
            bail!("classes must be strictly ascending: {:?}", classes);
        }
        Ok(Self { feature_names, classes, weights, bias })
    }

    /// Raw per-class scores, one row per input row.
    pub fn decision_function(&self, features: &FeatureTable) -> Result<Array2<f32>> {
        if features.columns() != self.feature_names.as_slice() {
            bail!(
                "feature schema mismatch: model expects {:?}, got {:?}",
                self.feature_names,
                features.columns()
            );
        }
        if features.n_rows() == 0 {
            bail!("no rows to predict");
        }

        let x = Array2::from_shape_vec(
            (features.n_rows(), features.n_cols()),
            features.flat_values(),
        )?;
        Ok(x.dot(&self.weights) + &self.bias)
    }
}

impl Classifier for FittedModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn classes(&self) -> &[Label] {
        &self.classes
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<Label>> {
        let logits = self.decision_function(features)?;
        Ok(logits
            .rows()
            .into_iter()
            .map(|row| self.classes[argmax(row)])
            .collect())
    }
}

/// Index of the largest value; the first one wins on ties.
fn argmax(row: ArrayView1<f32>) -> usize {
    let mut best = 0;
    for (i, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = i;
        }
    }
    best
}
