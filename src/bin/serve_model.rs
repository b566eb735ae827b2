use anyhow::Result;
use clap::Parser;

use iris_pipeline::cli::{self, commands::ServeArgs};

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();
    cli::run_serve(ServeArgs::parse()).await
}
