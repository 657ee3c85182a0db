// azseed/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing::Level;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing)
    // stdout carries the progress lines, diagnostics go to stderr.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.command {
        Commands::Apply {
            target,
            seed_file,
            report,
            strict,
        } => commands::apply::execute(target, seed_file, report, strict).await,

        Commands::Check { target } => commands::check::execute(target).await,

        Commands::Inspect {
            config,
            seed_file,
            list,
        } => commands::inspect::execute(config, seed_file, list),
    }
}
