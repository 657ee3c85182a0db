// azseed-core/src/application/connectivity.rs

use tracing::{debug, instrument};

use crate::domain::Session;
use crate::error::SeedError;
use crate::ports::{QueryExecutor, QueryResponse};

/// AUTHENTICATED -> CONNECTIVITY_VERIFIED.
///
/// Runs a read-only query before anything mutating is sent.
#[instrument(skip(executor, session))]
pub async fn verify_connectivity<E>(
    executor: &E,
    session: &Session,
    test_query: &str,
) -> Result<QueryResponse, SeedError>
where
    E: QueryExecutor + ?Sized,
{
    println!("🔄 Testing connection to Azure SQL Database...");

    match executor.execute(session, test_query).await {
        Ok(response) if response.is_success() => {
            println!(
                "✅ Connected successfully. Test query result: {}",
                compact_body(&response.body)
            );
            Ok(response)
        }
        Ok(response) => Err(SeedError::Connectivity {
            status: Some(response.status),
            body: Some(response.body),
            source: None,
        }),
        Err(e) => {
            debug!("Connectivity test got no response: {}", e);
            Err(SeedError::Connectivity {
                status: None,
                body: None,
                source: Some(Box::new(e)),
            })
        }
    }
}

/// Re-serializes JSON bodies on one line; anything else is returned as is.
fn compact_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .map(|v| v.to_string())
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{RecordingExecutor, session};
    use anyhow::Result;

    #[tokio::test]
    async fn test_success_returns_response() -> Result<()> {
        let executor = RecordingExecutor::always(200);
        let response = verify_connectivity(&executor, &session()?, "SELECT 1").await?;
        assert_eq!(response.status, 200);
        assert_eq!(executor.calls(), vec!["SELECT 1"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_non_200_keeps_status_and_body() -> Result<()> {
        let executor = RecordingExecutor::always(401);
        let result = verify_connectivity(&executor, &session()?, "SELECT 1").await;
        match result {
            Err(SeedError::Connectivity { status, body, .. }) => {
                assert_eq!(status, Some(401));
                assert_eq!(body.as_deref(), Some("status 401"));
            }
            other => anyhow::bail!("unexpected result: {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_no_response() -> Result<()> {
        let executor = RecordingExecutor::new(|_| None);
        let result = verify_connectivity(&executor, &session()?, "SELECT 1").await;
        match result {
            Err(SeedError::Connectivity {
                status: None,
                source: Some(cause),
                ..
            }) => assert!(cause.to_string().contains("connection reset")),
            other => anyhow::bail!("unexpected result: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_compact_body() {
        assert_eq!(compact_body("{\n  \"a\": 1\n}"), r#"{"a":1}"#);
        assert_eq!(compact_body(" plain text \n"), "plain text");
    }
}
