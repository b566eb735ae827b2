// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// One argument struct per executable. Every flag is optional
// and its default is the fixed pipeline setting, so running a
// binary with no arguments reproduces the standard behaviour.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for malformed values
//   - type conversion (string → u16, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Parser;

use crate::application::{
    prepare_use_case::PrepareConfig,
    serve_use_case::ServeConfig,
    train_use_case::TrainConfig,
};

/// Arguments for `prepare-data`.
#[derive(Parser, Debug)]
#[command(
    name = "prepare-data",
    version,
    about = "Split the iris dataset into train/test CSV artifacts."
)]
pub struct PrepareArgs {
    /// Directory the four partition CSVs are written to
    #[arg(long, default_value = ".")]
    pub artifact_dir: String,

    /// Fraction of rows held out for testing, in (0, 1)
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Seed for the row shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for `train-model`.
#[derive(Parser, Debug)]
#[command(
    name = "train-model",
    version,
    about = "Fit a logistic-regression classifier on the prepared partition."
)]
pub struct TrainArgs {
    /// Directory holding the partition CSVs; model.pkl is written here too
    #[arg(long, default_value = ".")]
    pub artifact_dir: String,

    /// Number of full passes through the training rows
    #[arg(long, default_value_t = 200)]
    pub epochs: usize,

    /// Rows per mini-batch
    #[arg(long, default_value_t = 16)]
    pub batch_size: usize,

    /// Adam step size
    #[arg(long, default_value_t = 0.05)]
    pub learning_rate: f64,

    /// Seed for weight updates and batch shuffling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for `serve-model`.
#[derive(Parser, Debug)]
#[command(
    name = "serve-model",
    version,
    about = "Serve predictions from model.pkl over HTTP."
)]
pub struct ServeArgs {
    /// Directory holding model.pkl
    #[arg(long, default_value = ".")]
    pub artifact_dir: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}

// ─── Conversions ──────────────────────────────────────────────────────────────
// The application layer only ever sees its own config types.

impl From<PrepareArgs> for PrepareConfig {
    fn from(args: PrepareArgs) -> Self {
        Self {
            artifact_dir:  args.artifact_dir,
            test_fraction: args.test_fraction,
            seed:          args.seed,
        }
    }
}

impl From<TrainArgs> for TrainConfig {
    fn from(args: TrainArgs) -> Self {
        Self {
            artifact_dir:  args.artifact_dir,
            epochs:        args.epochs,
            batch_size:    args.batch_size,
            learning_rate: args.learning_rate,
            seed:          args.seed,
        }
    }
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            artifact_dir: args.artifact_dir,
            host:         args.host,
            port:         args.port,
        }
    }
}
