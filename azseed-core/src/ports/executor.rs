// azseed-core/src/ports/executor.rs

use crate::domain::Session;
use crate::error::SeedError;
use async_trait::async_trait;

/// Raw answer of the query endpoint, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub status: u16,
    pub body: String,
}

impl QueryResponse {
    /// Only a plain 200 counts: other 2xx codes are treated as failures.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Sends one statement.
    ///
    /// `Ok` whenever the server answered (check [`QueryResponse::is_success`]);
    /// `Err` when no response was received at all.
    async fn execute(&self, session: &Session, statement: &str)
    -> Result<QueryResponse, SeedError>;
}
