// ============================================================
// Layer 4 — Tabular Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<TabularSample>
// into tensors:
//
//   Input:  N samples, each with F feature values
//   Output: features [N, F] (float), targets [N] (int)
//
// All rows of a table have the same width, so stacking is a
// flatten + reshape with no padding.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::TabularSample;

/// A batch of rows ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct TabularBatch<B: Backend> {
    /// Shape: [batch_size, n_features]
    pub features: Tensor<B, 2>,

    /// Class indices — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

/// Holds the target device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct TabularBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> TabularBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<TabularSample, TabularBatch<B>> for TabularBatcher<B> {
    fn batch(&self, items: Vec<TabularSample>) -> TabularBatch<B> {
        let batch_size = items.len();
        let n_features = items.first().map(|s| s.features.len()).unwrap_or(0);

        let flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();

        // Burn uses i32 input for Int tensors
        let targets: Vec<i32> = items
            .iter()
            .map(|s| s.class_index as i32)
            .collect();

        let features = Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([batch_size, n_features]);
        let targets = Tensor::<B, 1, Int>::from_ints(targets.as_slice(), &self.device);

        TabularBatch { features, targets }
    }
}
