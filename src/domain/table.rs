// ============================================================
// Layer 3 — Tabular Domain Types
// ============================================================
// A Dataset is a FeatureTable (numeric columns) plus a
// LabelColumn (integer class per row). Rows have no identity
// beyond their position, so every operation that picks rows
// out of a Dataset applies the same indices to both halves —
// features and labels can never drift out of alignment.
//
//   FeatureTable   columns: [sepal_length, sepal_width, ...]
//                  rows:    [[5.1, 3.5, 1.4, 0.2], ...]
//   LabelColumn    name:    "target"
//                  values:  [0, 0, 1, 2, ...]
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §9 (Recoverable Errors with Result)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A class label. Iris uses 0 = setosa, 1 = versicolor, 2 = virginica.
pub type Label = i64;

/// Named numeric columns stored row-major.
///
/// Invariant: every row holds exactly `columns.len()` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows:    Vec<Vec<f32>>,
}

impl FeatureTable {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f32>>) -> Result<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            bail!(
                "row {} has {} values but the table has {} columns",
                i,
                row.len(),
                columns.len()
            );
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// All values in row-major order, ready for reshaping into a matrix.
    pub fn flat_values(&self) -> Vec<f32> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Copy the rows at `indices` (in that order) into a new table.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows:    indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Fails unless `other` has the same column names in the same order.
    pub fn ensure_same_schema(&self, other: &FeatureTable) -> Result<()> {
        if self.columns != other.columns {
            bail!(
                "feature schema mismatch: expected {:?}, found {:?}",
                self.columns,
                other.columns
            );
        }
        Ok(())
    }
}

/// A single named column of class labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelColumn {
    name:   String,
    values: Vec<Label>,
}

impl LabelColumn {
    pub fn new(name: impl Into<String>, values: Vec<Label>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Label] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            name:   self.name.clone(),
            values: indices.iter().map(|&i| self.values[i]).collect(),
        }
    }

    /// Distinct labels in ascending order — the classifier's class set.
    pub fn classes(&self) -> Vec<Label> {
        let mut classes = self.values.clone();
        classes.sort_unstable();
        classes.dedup();
        classes
    }
}

/// Features plus target, row-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: FeatureTable,
    target:   LabelColumn,
}

impl Dataset {
    /// Pair a feature table with its labels.
    /// Fails if they do not describe the same number of rows.
    pub fn new(features: FeatureTable, target: LabelColumn) -> Result<Self> {
        if features.n_rows() != target.len() {
            bail!(
                "features have {} rows but target '{}' has {} rows",
                features.n_rows(),
                target.name(),
                target.len()
            );
        }
        Ok(Self { features, target })
    }

    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    pub fn target(&self) -> &LabelColumn {
        &self.target
    }

    pub fn n_rows(&self) -> usize {
        self.features.n_rows()
    }

    /// Pick the same rows out of features and target.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(indices),
            target:   self.target.select(indices),
        }
    }
}

/// The train/test split produced by data preparation.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub train: Dataset,
    pub test:  Dataset,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ragged_table_rejected() {
        let result = FeatureTable::new(cols(&["a", "b"]), vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_select_keeps_features_and_labels_aligned() {
        let features = FeatureTable::new(
            cols(&["x"]),
            vec![vec![10.0], vec![20.0], vec![30.0]],
        )
        .unwrap();
        let target  = LabelColumn::new("target", vec![1, 2, 3]);
        let dataset = Dataset::new(features, target).unwrap();

        let picked = dataset.select(&[2, 0]);
        assert_eq!(picked.features().rows(), &[vec![30.0], vec![10.0]]);
        assert_eq!(picked.target().values(), &[3, 1]);
    }

    #[test]
    fn test_dataset_row_count_mismatch() {
        let features = FeatureTable::new(cols(&["x"]), vec![vec![1.0], vec![2.0]]).unwrap();
        let target   = LabelColumn::new("target", vec![0]);
        assert!(Dataset::new(features, target).is_err());
    }

    #[test]
    fn test_classes_sorted_and_unique() {
        let target = LabelColumn::new("target", vec![2, 0, 2, 1, 0]);
        assert_eq!(target.classes(), vec![0, 1, 2]);
    }

    #[test]
    fn test_schema_comparison_is_order_sensitive() {
        let a = FeatureTable::new(cols(&["x", "y"]), vec![]).unwrap();
        let b = FeatureTable::new(cols(&["y", "x"]), vec![]).unwrap();
        assert!(a.ensure_same_schema(&a.clone()).is_ok());
        assert!(a.ensure_same_schema(&b).is_err());
    }
}
