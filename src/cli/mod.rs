// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry points shared by the three executables in src/bin/.
// Each one parses its arguments, hands a config to Layer 2,
// and prints the user-facing completion lines.
//
//   prepare-data  → run_prepare
//   train-model   → run_train
//   serve-model   → run_serve
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::infra::artifacts::{MODEL_FILE, X_TEST_FILE, X_TRAIN_FILE, Y_TEST_FILE, Y_TRAIN_FILE};
use commands::{PrepareArgs, ServeArgs, TrainArgs};

/// Install the fmt subscriber. RUST_LOG wins when set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iris_pipeline=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Handles `prepare-data`.
pub fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing partition in: {}", args.artifact_dir);
    PrepareUseCase::new(args.into()).execute()?;

    println!(
        "Data processing complete. Files saved: {X_TRAIN_FILE}, {X_TEST_FILE}, {Y_TRAIN_FILE}, {Y_TEST_FILE}"
    );
    Ok(())
}

/// Handles `train-model`.
pub fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Training from artifacts in: {}", args.artifact_dir);
    let report = TrainUseCase::new(args.into()).execute()?;

    println!("Model Accuracy: {}", report.accuracy);
    println!("Model training complete. Model saved to {MODEL_FILE}");
    Ok(())
}

/// Handles `serve-model`. Returns only after a graceful shutdown.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    use crate::application::serve_use_case::ServeUseCase;

    // A load failure ends the process before anything is bound
    let service = ServeUseCase::load(args.into())?;
    service.run().await
}
