// ============================================================
// Layer 4 — Partition Store
// ============================================================
// Writes and reads the four CSV artifacts that hand a
// Partition from data preparation to training:
//
//   X_train.csv   sepal_length,sepal_width,petal_length,petal_width
//   X_test.csv    (same header)
//   y_train.csv   target
//   y_test.csv    target
//
// Every file has a header row and NO index column.
//
// Reading is strict — training must never silently fit on a
// broken hand-off. Loading fails when:
//   - any of the four files is missing
//   - a value does not parse, or a record has the wrong width
//   - a y_* file does not have exactly one column
//   - X_train and X_test headers differ
//   - X_* and its paired y_* have different row counts
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::domain::table::{Dataset, FeatureTable, Label, LabelColumn, Partition};
use crate::infra::artifacts::ArtifactPaths;

/// Reads and writes a Partition as four CSV files.
pub struct PartitionStore {
    paths: ArtifactPaths,
}

impl PartitionStore {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self { paths }
    }

    /// Write all four artifacts, overwriting existing files.
    pub fn save(&self, partition: &Partition) -> Result<()> {
        write_features(&self.paths.x_train(), partition.train.features())?;
        write_features(&self.paths.x_test(), partition.test.features())?;
        write_labels(&self.paths.y_train(), partition.train.target())?;
        write_labels(&self.paths.y_test(), partition.test.target())?;

        tracing::debug!(
            "Wrote partition artifacts to '{}'",
            self.paths.dir().display()
        );
        Ok(())
    }

    /// Read all four artifacts back and validate that they fit together.
    pub fn load(&self) -> Result<Partition> {
        let x_train = read_features(&self.paths.x_train())?;
        let x_test  = read_features(&self.paths.x_test())?;
        let y_train = read_labels(&self.paths.y_train())?;
        let y_test  = read_labels(&self.paths.y_test())?;

        x_train
            .ensure_same_schema(&x_test)
            .context("X_train and X_test disagree on columns")?;

        let train = Dataset::new(x_train, y_train)
            .context("X_train and y_train are not row-aligned")?;
        let test = Dataset::new(x_test, y_test)
            .context("X_test and y_test are not row-aligned")?;

        tracing::debug!(
            "Read partition: {} train rows, {} test rows",
            train.n_rows(),
            test.n_rows()
        );
        Ok(Partition { train, test })
    }
}

fn write_features(path: &Path, table: &FeatureTable) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    Ok(())
}

fn write_labels(path: &Path, column: &LabelColumn) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    wtr.write_record([column.name()])?;
    for label in column.values() {
        wtr.write_record([label.to_string()])?;
    }
    wtr.flush()
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    Ok(())
}

fn read_features(path: &Path) -> Result<FeatureTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("'{}' row {}", path.display(), i))?;
        let row = record
            .iter()
            .map(|v| v.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("'{}' row {} has a non-numeric value", path.display(), i))?;
        rows.push(row);
    }

    FeatureTable::new(columns, rows).with_context(|| format!("'{}'", path.display()))
}

fn read_labels(path: &Path) -> Result<LabelColumn> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;

    let headers = rdr.headers()?.clone();
    if headers.len() != 1 {
        bail!(
            "'{}' must have exactly one column, found {:?}",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        );
    }

    let mut values = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("'{}' row {}", path.display(), i))?;
        let label: Label = record[0]
            .trim()
            .parse()
            .with_context(|| format!("'{}' row {} is not an integer label", path.display(), i))?;
        values.push(label);
    }

    Ok(LabelColumn::new(&headers[0], values))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_partition() -> Partition {
        let cols = vec!["a".to_string(), "b".to_string()];
        let train = Dataset::new(
            FeatureTable::new(cols.clone(), vec![vec![1.5, 2.0], vec![0.1, 7.25]]).unwrap(),
            LabelColumn::new("target", vec![0, 1]),
        )
        .unwrap();
        let test = Dataset::new(
            FeatureTable::new(cols, vec![vec![3.3, 4.4]]).unwrap(),
            LabelColumn::new("target", vec![1]),
        )
        .unwrap();
        Partition { train, test }
    }

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = PartitionStore::new(ArtifactPaths::new(dir.path()));
        let part  = sample_partition();

        store.save(&part).unwrap();
        assert_eq!(store.load().unwrap(), part);
    }

    #[test]
    fn test_csv_layout_has_header_and_no_index() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        PartitionStore::new(paths.clone()).save(&sample_partition()).unwrap();

        assert_eq!(fs::read_to_string(paths.x_train()).unwrap(), "a,b\n1.5,2\n0.1,7.25\n");
        assert_eq!(fs::read_to_string(paths.y_train()).unwrap(), "target\n0\n1\n");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        let store = PartitionStore::new(paths.clone());
        store.save(&sample_partition()).unwrap();

        fs::remove_file(paths.y_test()).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_row_count_mismatch_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        let store = PartitionStore::new(paths.clone());
        store.save(&sample_partition()).unwrap();

        fs::write(paths.y_train(), "target\n0\n").unwrap();
        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("row-aligned"));
    }

    #[test]
    fn test_multi_column_target_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        let store = PartitionStore::new(paths.clone());
        store.save(&sample_partition()).unwrap();

        fs::write(paths.y_test(), "target,extra\n1,2\n").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_schema_mismatch_between_train_and_test_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        let store = PartitionStore::new(paths.clone());
        store.save(&sample_partition()).unwrap();

        fs::write(paths.x_test(), "b,a\n4.4,3.3\n").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_ragged_record_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        let store = PartitionStore::new(paths.clone());
        store.save(&sample_partition()).unwrap();

        fs::write(paths.x_train(), "a,b\n1.5\n0.1,7.25\n").unwrap();
        assert!(store.load().is_err());
    }
}
