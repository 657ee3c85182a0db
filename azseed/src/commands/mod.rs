// azseed/src/commands/mod.rs

pub mod apply;
pub mod check;
pub mod inspect;

use anyhow::Context;
use std::path::PathBuf;

use azseed_core::SeedError;
use azseed_core::infrastructure::config::{SeedConfig, load_seed_config};
use azseed_core::infrastructure::error::InfrastructureError;

use crate::cli::TargetArgs;

/// Defaults < azseed.yaml < AZSEED_* < flags, then validated.
pub fn resolve_config(
    target: &TargetArgs,
    seed_file: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<SeedConfig> {
    let cwd = std::env::current_dir()?;
    let mut config = load_seed_config(&cwd, target.config.as_deref())
        .context("Failed to load azseed configuration")?;
    config.apply_overrides(target.overrides(seed_file, strict));
    Ok(config.validated()?)
}

/// Prints a fatal run error the way the operator expects to read it.
pub fn report_fatal(err: SeedError) {
    match &err {
        SeedError::Authentication { .. } => {
            eprintln!("❌ Failed to authenticate with Azure");
        }
        SeedError::Connectivity { body, .. } => {
            eprintln!("❌ {}", err);
            if let Some(body) = body {
                eprintln!("Response: {}", body);
            }
        }
        SeedError::Infrastructure(InfrastructureError::SeedFileNotFound(_)) => {
            eprintln!("❌ {}", err);
        }
        SeedError::SeedFile { source, .. } => {
            eprintln!("❌ Error reading/executing SQL: {}", source);
        }
        _ => eprintln!("💥 {}", err),
    }
    eprintln!("{:?}", miette::Report::new(err));
}
