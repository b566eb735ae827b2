// ============================================================
// Layer 4 — Iris Loader
// ============================================================
// The pipeline always starts from the same fixed dataset: the
// 150-row iris table (50 setosa, 50 versicolor, 50 virginica).
// It is embedded into the binary with include_str! so data
// preparation needs no network or input file.
//
// Embedded format (header + one row per flower):
//   sepal_length,sepal_width,petal_length,petal_width,target
//   5.1,3.5,1.4,0.2,0
//   ...
//
// The last column is the target; every other column is a
// numeric feature.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};

use crate::domain::table::{Dataset, FeatureTable, Label, LabelColumn};
use crate::domain::traits::DatasetSource;

const IRIS_CSV: &str = include_str!("iris.csv");

/// Feature column names, in training order.
pub const FEATURE_NAMES: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// Name of the label column.
pub const TARGET_COLUMN: &str = "target";

/// Loads the embedded iris dataset.
/// Implements DatasetSource so the prepare use case does not
/// depend on where the rows come from.
#[derive(Debug, Default, Clone, Copy)]
pub struct IrisLoader;

impl IrisLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSource for IrisLoader {
    fn load(&self) -> Result<Dataset> {
        let dataset = parse_labelled_csv(IRIS_CSV, TARGET_COLUMN)
            .context("Embedded iris table is malformed")?;
        tracing::debug!("Loaded iris dataset: {} rows", dataset.n_rows());
        Ok(dataset)
    }
}

/// Parse CSV text whose last column is `target` and whose other
/// columns are numeric features.
fn parse_labelled_csv(text: &str, target: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    match headers.last() {
        Some(last) if last == target => {}
        _ => bail!("expected '{}' as the last column, found {:?}", target, headers),
    }
    let columns = headers[..headers.len() - 1].to_vec();

    let mut rows   = Vec::new();
    let mut labels = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("bad record at row {i}"))?;
        let n_fields = record.len();
        if n_fields == 0 {
            bail!("empty record at row {i}");
        }

        let row = record
            .iter()
            .take(n_fields - 1)
            .map(|v| v.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("non-numeric feature at row {i}"))?;
        let label: Label = record[n_fields - 1]
            .trim()
            .parse()
            .with_context(|| format!("non-integer target at row {i}"))?;

        rows.push(row);
        labels.push(label);
    }

    Dataset::new(
        FeatureTable::new(columns, rows)?,
        LabelColumn::new(target, labels),
    )
}
