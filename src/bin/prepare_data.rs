use anyhow::Result;
use clap::Parser;

use iris_pipeline::cli::{self, commands::PrepareArgs};

fn main() -> Result<()> {
    cli::init_tracing();
    cli::run_prepare(PrepareArgs::parse())
}
