use anyhow::{anyhow, Result};
use burn::{
    nn::{loss::CrossEntropyLossConfig, Initializer, Linear, LinearConfig},
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct LogisticRegressionConfig {
    pub n_features: usize,
    pub n_classes:  usize,
}

impl LogisticRegressionConfig {
    /// Weights and bias start at zero, so fitting never depends on
    /// the backend's random initialisation.
    pub fn init<B: Backend>(&self, device: &B::Device) -> LogisticRegression<B> {
        let linear = LinearConfig::new(self.n_features, self.n_classes)
            .with_initializer(Initializer::Zeros)
            .init(device);
        LogisticRegression { linear }
    }
}

#[derive(Module, Debug)]
pub struct LogisticRegression<B: Backend> {
    pub linear: Linear<B>,
}

impl<B: Backend> LogisticRegression<B> {
    /// features: [batch, n_features] → logits: [batch, n_classes]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        self.linear.forward(features)
    }

    /// Mean softmax cross-entropy against class indices [batch].
    pub fn forward_loss(
        &self,
        features: Tensor<B, 2>,
        targets:  Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(features);
        let ce = CrossEntropyLossConfig::new().init(&logits.device());
        let loss = ce.forward(logits.clone(), targets);
        (loss, logits)
    }

    /// Copy the learned parameters out of the module.
    ///
    /// Returns (weights row-major [n_features, n_classes], bias [n_classes]).
    pub fn parameters(&self) -> Result<(Vec<f32>, Vec<f32>)> {
        let weight = self.linear.weight.val();
        let [_, n_classes] = weight.dims();

        let weights = weight
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("cannot read weights: {e:?}"))?;

        let bias = match &self.linear.bias {
            Some(bias) => bias
                .val()
                .into_data()
                .to_vec::<f32>()
                .map_err(|e| anyhow!("cannot read bias: {e:?}"))?,
            None => vec![0.0; n_classes],
        };

        Ok((weights, bias))
    }
}
