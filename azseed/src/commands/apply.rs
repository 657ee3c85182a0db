// azseed/src/commands/apply.rs
//
// USE CASE: Apply the seed file to the target database.

use anyhow::Context;
use std::path::PathBuf;

use azseed_core::application::{SeedPlan, run_seed, save_report};
use azseed_core::infrastructure::adapters::{AzureCliCredentials, RestQueryExecutor};

use crate::cli::TargetArgs;
use crate::commands::{report_fatal, resolve_config};

pub async fn execute(
    target: TargetArgs,
    seed_file: Option<PathBuf>,
    report_path: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Resolve the Config (Infra)
    let config = resolve_config(&target, seed_file, strict)?;
    println!(
        "⚙️  Target: {}/{} (resource group {})",
        config.server, config.database, config.resource_group
    );

    // B. Instantiate the Adapters
    let credentials = AzureCliCredentials::from_config(&config);
    let executor =
        RestQueryExecutor::from_config(&config).context("Failed to build the HTTP client")?;

    // C. Run (Application Layer)
    let plan = SeedPlan::from_config(&config);
    match run_seed(&credentials, &executor, &plan).await {
        Ok(report) => {
            if let Some(path) = report_path {
                save_report(&path, &report)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                println!("📄 Report saved to {}", path.display());
            }

            // Partial failures still end the run successfully unless strict.
            if config.strict && !report.all_succeeded() {
                eprintln!(
                    "\n❌ [Strict] {} statement(s) failed.",
                    report.failed()
                );
                std::process::exit(1);
            }
            println!("\n✨ Done in {:.2?}", start.elapsed());
        }
        Err(e) => {
            report_fatal(e);
            std::process::exit(1);
        }
    }

    Ok(())
}
