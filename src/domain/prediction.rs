// ============================================================
// Layer 3 — Prediction Request / Response
// ============================================================
// The JSON contract of POST /predict.
//
// Request — `features` may be given row-wise or column-wise,
// the two shapes a dataframe constructor accepts:
//
//   {"features": [{"sepal_length": 5.1, "sepal_width": 3.5, ...}, ...]}
//   {"features": {"sepal_length": [5.1, 6.2], "sepal_width": [3.5, 2.9], ...}}
//
// Response — one label per input row, same order:
//
//   {"prediction": [0, 1]}
//
// Columns are matched by NAME against the model's training
// schema and reordered into training order. A missing or an
// unknown column is an error, never a silent guess.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::table::{FeatureTable, Label};

/// Body of a POST /predict request.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub features: FeatureRows,
}

/// The two accepted layouts of the `features` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeatureRows {
    /// One JSON object per row
    Records(Vec<BTreeMap<String, f32>>),

    /// One JSON array per column, all of equal length
    Columns(BTreeMap<String, Vec<f32>>),
}

impl FeatureRows {
    /// Convert to a table whose columns follow `schema` exactly.
    pub fn into_table(self, schema: &[String]) -> Result<FeatureTable> {
        let rows = match self {
            FeatureRows::Records(records) => records_to_rows(records, schema)?,
            FeatureRows::Columns(columns) => columns_to_rows(columns, schema)?,
        };
        if rows.is_empty() {
            bail!("request contains no feature rows");
        }
        FeatureTable::new(schema.to_vec(), rows)
    }
}

/// Body of a successful POST /predict response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: Vec<Label>,
}

fn records_to_rows(
    records: Vec<BTreeMap<String, f32>>,
    schema:  &[String],
) -> Result<Vec<Vec<f32>>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| -> Result<Vec<f32>> {
            reject_unknown(record.keys(), schema)
                .with_context(|| format!("row {i}"))?;
            schema
                .iter()
                .map(|name| {
                    record
                        .get(name)
                        .copied()
                        .with_context(|| format!("row {i} is missing column '{name}'"))
                })
                .collect()
        })
        .collect()
}

fn columns_to_rows(
    mut columns: BTreeMap<String, Vec<f32>>,
    schema:      &[String],
) -> Result<Vec<Vec<f32>>> {
    reject_unknown(columns.keys(), schema)?;

    let mut ordered = Vec::with_capacity(schema.len());
    for name in schema {
        let values = columns
            .remove(name)
            .with_context(|| format!("missing column '{name}'"))?;
        ordered.push(values);
    }

    let n_rows = ordered.first().map(Vec::len).unwrap_or(0);
    if let Some((name, values)) = schema
        .iter()
        .zip(&ordered)
        .find(|(_, values)| values.len() != n_rows)
    {
        bail!(
            "column '{}' has {} values, expected {}",
            name,
            values.len(),
            n_rows
        );
    }

    // Transpose column-major input into row-major rows
    Ok((0..n_rows)
        .map(|r| ordered.iter().map(|column| column[r]).collect())
        .collect())
}

fn reject_unknown<'a>(
    names:  impl Iterator<Item = &'a String>,
    schema: &[String],
) -> Result<()> {
    for name in names {
        if !schema.contains(name) {
            bail!("unknown column '{name}'");
        }
    }
    Ok(())
}
