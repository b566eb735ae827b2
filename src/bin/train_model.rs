use anyhow::Result;
use clap::Parser;

use iris_pipeline::cli::{self, commands::TrainArgs};

fn main() -> Result<()> {
    cli::init_tracing();
    cli::run_train(TrainArgs::parse())
}
