// azseed-core/src/application/run.rs

use std::path::PathBuf;
use tracing::{info, instrument};

use crate::application::authenticate::authenticate;
use crate::application::connectivity::verify_connectivity;
use crate::application::script::load_seed_script;
use crate::application::seeding::apply_statements;
use crate::domain::RunReport;
use crate::error::SeedError;
use crate::infrastructure::config::SeedConfig;
use crate::ports::{CredentialProvider, QueryExecutor};

#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub seed_file: PathBuf,
    pub test_query: String,
}

impl SeedPlan {
    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            seed_file: config.seed_file.clone(),
            test_query: config.test_query.clone(),
        }
    }
}

/// Full run, strictly linear:
/// START -> AUTHENTICATED -> CONNECTIVITY_VERIFIED -> SEED_FILE_LOADED
/// -> STATEMENTS_EXECUTED -> DONE.
///
/// `Err` means the run aborted before any statement was sent. Once the
/// statements phase is reached the run always ends with `Ok`, even if every
/// statement failed: inspect the report to tell.
#[instrument(skip(provider, executor))]
pub async fn run_seed<C, E>(
    provider: &C,
    executor: &E,
    plan: &SeedPlan,
) -> Result<RunReport, SeedError>
where
    C: CredentialProvider + ?Sized,
    E: QueryExecutor + ?Sized,
{
    let session = authenticate(provider).await?;

    verify_connectivity(executor, &session, &plan.test_query).await?;

    println!("🔄 Reading supplemental seed data...");
    let script = load_seed_script(&plan.seed_file)?;

    let report = apply_statements(executor, &session, &script.statements).await;
    info!(
        succeeded = report.succeeded,
        failed = report.failed(),
        "Seeding run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{RecordingExecutor, ScriptedCredentials};
    use crate::infrastructure::error::InfrastructureError;
    use anyhow::Result;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    const TEST_QUERY: &str = "SELECT COUNT(*) FROM T";

    fn seed_dir(content: &str) -> Result<TempDir> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("seed.sql"), content)?;
        Ok(dir)
    }

    fn plan(dir: &Path) -> SeedPlan {
        SeedPlan {
            seed_file: dir.join("seed.sql"),
            test_query: TEST_QUERY.to_string(),
        }
    }

    #[tokio::test]
    async fn test_print_dropped_and_order_kept() -> Result<()> {
        let dir = seed_dir("INSERT INTO T VALUES (1); PRINT 'done'; INSERT INTO T VALUES (2);")?;
        let executor = RecordingExecutor::always(200);

        let report = run_seed(
            &ScriptedCredentials::ok("sub", "tok"),
            &executor,
            &plan(dir.path()),
        )
        .await?;

        assert_eq!(
            executor.calls(),
            vec![
                TEST_QUERY,
                "INSERT INTO T VALUES (1)",
                "INSERT INTO T VALUES (2)"
            ]
        );
        assert_eq!(report.summary(), "2/2");
        Ok(())
    }

    #[tokio::test]
    async fn test_all_statements_failing_still_completes() -> Result<()> {
        let dir = seed_dir("INSERT INTO T VALUES (1);\nINSERT INTO T VALUES (2);\nINSERT INTO T VALUES (3);")?;
        let executor = RecordingExecutor::new(|stmt| {
            if stmt == TEST_QUERY { Some(200) } else { Some(500) }
        });

        let report = run_seed(
            &ScriptedCredentials::ok("sub", "tok"),
            &executor,
            &plan(dir.path()),
        )
        .await?;

        assert_eq!(report.summary(), "0/3");
        assert_eq!(report.failed(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_token_stops_before_any_query() -> Result<()> {
        // No seed file on disk: reading it would surface a different error.
        let dir = tempdir()?;
        let executor = RecordingExecutor::always(200);

        let result = run_seed(&ScriptedCredentials::no_token(), &executor, &plan(dir.path())).await;

        assert!(matches!(result, Err(SeedError::Authentication { .. })));
        assert!(executor.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_connectivity_sends_no_statement() -> Result<()> {
        let dir = seed_dir("INSERT INTO T VALUES (1);")?;
        let executor = RecordingExecutor::always(403);

        let result = run_seed(
            &ScriptedCredentials::ok("sub", "tok"),
            &executor,
            &plan(dir.path()),
        )
        .await;

        assert!(matches!(
            result,
            Err(SeedError::Connectivity {
                status: Some(403),
                ..
            })
        ));
        assert_eq!(executor.calls(), vec![TEST_QUERY]);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_seed_file_aborts() -> Result<()> {
        let dir = tempdir()?;
        let executor = RecordingExecutor::always(200);

        let result = run_seed(
            &ScriptedCredentials::ok("sub", "tok"),
            &executor,
            &plan(dir.path()),
        )
        .await;

        assert!(matches!(
            result,
            Err(SeedError::Infrastructure(
                InfrastructureError::SeedFileNotFound(_)
            ))
        ));
        assert_eq!(executor.calls(), vec![TEST_QUERY]);
        Ok(())
    }
}
