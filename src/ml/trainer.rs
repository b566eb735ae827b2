// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Mini-batch Adam on Autodiff<NdArray> (CPU):
//
//   for each epoch:
//     for each shuffled batch:
//       logits = X·W + b
//       loss   = cross_entropy(softmax(logits), y)
//       W, b  -= Adam(∂loss/∂W, ∂loss/∂b)
//
// Determinism: weights start at zero and the DataLoader shuffle
// is seeded from TrainConfig::seed with no worker threads, so
// the same partition + seed always yields the same model.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::{bail, Result};
use burn::{
    backend::ndarray::NdArrayDevice,
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};
use ndarray::{Array1, Array2};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::TabularBatcher, dataset::TabularDataset};
use crate::domain::table::Dataset;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::inferencer::FittedModel;
use crate::ml::model::{LogisticRegression, LogisticRegressionConfig};

type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

/// Fit a logistic regression on `train` and return the
/// backend-free FittedModel. Logs the mean loss of every epoch.
pub fn run_training(
    cfg:    &TrainConfig,
    train:  &Dataset,
    logger: &MetricsLogger,
) -> Result<FittedModel> {
    if train.n_rows() == 0 {
        bail!("training set is empty");
    }
    let classes = train.target().classes();
    if classes.len() < 2 {
        bail!(
            "need at least two classes to fit a classifier, found {:?}",
            classes
        );
    }
    let n_features = train.features().n_cols();
    let dataset    = TabularDataset::from_dataset(train, &classes)?;

    let device = NdArrayDevice::default();
    TrainBackend::seed(cfg.seed);

    // ── Build model ───────────────────────────────────────────────────────────
    let mut model: LogisticRegression<TrainBackend> =
        LogisticRegressionConfig::new(n_features, classes.len()).init(&device);
    tracing::info!(
        "Fitting logistic regression: {} features, {} classes, {} rows",
        n_features,
        classes.len(),
        train.n_rows()
    );

    let mut optim = AdamConfig::new().with_epsilon(1e-8).init();

    // ── Training data loader ──────────────────────────────────────────────────
    let loader = DataLoaderBuilder::new(TabularBatcher::<TrainBackend>::new(device.clone()))
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .build(dataset);

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in loader.iter() {
            let (loss, _) = model.forward_loss(batch.features, batch.targets);

            loss_sum += loss.clone().into_scalar().elem::<f64>();
            batches  += 1;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.learning_rate, model, grads);
        }

        logger.log(&EpochMetrics::new(epoch, loss_sum / batches.max(1) as f64))?;
    }

    // ── Export to a backend-free model ────────────────────────────────────────
    let (weights, bias) = model.valid().parameters()?;
    let weights = Array2::from_shape_vec((n_features, classes.len()), weights)?;

    tracing::info!("Training finished after {} epochs", cfg.epochs);
    FittedModel::new(
        train.features().columns().to_vec(),
        classes,
        weights,
        Array1::from(bias),
    )
}
