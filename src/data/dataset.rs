use anyhow::{Context, Result};
use burn::data::dataset::Dataset as BurnDataset;

use crate::domain::table::{Dataset, Label};

/// One feature row with its label encoded as a class index.
#[derive(Debug, Clone)]
pub struct TabularSample {
    pub features:    Vec<f32>,
    pub class_index: usize,
}

pub struct TabularDataset {
    samples: Vec<TabularSample>,
}

impl TabularDataset {
    pub fn new(samples: Vec<TabularSample>) -> Self { Self { samples } }

    /// Encode each label as its position in `classes` (sorted ascending).
    pub fn from_dataset(dataset: &Dataset, classes: &[Label]) -> Result<Self> {
        let samples = dataset
            .features()
            .rows()
            .iter()
            .zip(dataset.target().values())
            .map(|(row, label)| -> Result<TabularSample> {
                let class_index = classes
                    .binary_search(label)
                    .ok()
                    .with_context(|| format!("label {label} is not in the class set {classes:?}"))?;
                Ok(TabularSample { features: row.clone(), class_index })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(samples))
    }
}

impl BurnDataset<TabularSample> for TabularDataset {
    fn get(&self, index: usize) -> Option<TabularSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
