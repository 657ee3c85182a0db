// azseed/src/commands/check.rs
//
// USE CASE: Verify credentials and reachability without touching data.

use azseed_core::application::{authenticate, verify_connectivity};
use azseed_core::infrastructure::adapters::{AzureCliCredentials, RestQueryExecutor};

use crate::cli::TargetArgs;
use crate::commands::{report_fatal, resolve_config};

pub async fn execute(target: TargetArgs) -> anyhow::Result<()> {
    let config = resolve_config(&target, None, false)?;

    let credentials = AzureCliCredentials::from_config(&config);
    let executor = RestQueryExecutor::from_config(&config)?;

    let result = async {
        let session = authenticate(&credentials).await?;
        verify_connectivity(&executor, &session, &config.test_query).await
    }
    .await;

    if let Err(e) = result {
        report_fatal(e);
        std::process::exit(1);
    }
    Ok(())
}
