// azseed-core/src/infrastructure/adapters/rest_sql.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::Session;
use crate::error::SeedError;
use crate::infrastructure::config::SeedConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::executor::{QueryExecutor, QueryResponse};

/// The database addressed through the Azure management API.
#[derive(Debug, Clone)]
pub struct QueryTarget {
    pub management_url: String,
    pub resource_group: String,
    pub server: String,
    pub database: String,
    pub api_version: String,
}

impl QueryTarget {
    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            management_url: config.management_url.clone(),
            resource_group: config.resource_group.clone(),
            server: config.server.clone(),
            database: config.database.clone(),
            api_version: config.api_version.clone(),
        }
    }

    /// Query endpoint for `subscription_id`, without the `api-version` parameter.
    pub fn endpoint(&self, subscription_id: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Sql/servers/{}/databases/{}/query",
            self.management_url.trim_end_matches('/'),
            subscription_id,
            self.resource_group,
            self.server,
            self.database
        )
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

pub struct RestQueryExecutor {
    client: Client,
    target: QueryTarget,
}

impl RestQueryExecutor {
    pub fn new(target: QueryTarget, timeout: Option<Duration>) -> Result<Self, InfrastructureError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            target,
        })
    }

    pub fn from_config(config: &SeedConfig) -> Result<Self, InfrastructureError> {
        Self::new(
            QueryTarget::from_config(config),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }
}

#[async_trait]
impl QueryExecutor for RestQueryExecutor {
    #[instrument(skip(self, session, statement), fields(statement.len = statement.len()))]
    async fn execute(
        &self,
        session: &Session,
        statement: &str,
    ) -> Result<QueryResponse, SeedError> {
        let url = self.target.endpoint(&session.subscription_id);

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.target.api_version.as_str())])
            .bearer_auth(session.token.secret())
            .json(&QueryRequest { query: statement })
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_else(|e| {
            warn!("Failed to read response body (status {}): {}", status, e);
            String::new()
        });
        debug!(status, body.len = body.len(), "Query answered");

        Ok(QueryResponse { status, body })
    }
}
