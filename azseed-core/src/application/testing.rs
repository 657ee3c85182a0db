// azseed-core/src/application/testing.rs
//
// In-memory ports for use-case tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::{AccessToken, DomainError, Session};
use crate::error::SeedError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{CredentialProvider, QueryExecutor, QueryResponse};

pub fn session() -> Result<Session, SeedError> {
    Ok(Session::new("sub-test", AccessToken::new("tok-test")?)?)
}

pub struct ScriptedCredentials {
    subscription: Option<String>,
    token: Option<String>,
}

impl ScriptedCredentials {
    pub fn ok(subscription: &str, token: &str) -> Self {
        Self {
            subscription: Some(subscription.into()),
            token: Some(token.into()),
        }
    }

    pub fn no_token() -> Self {
        Self {
            subscription: Some("sub-test".into()),
            token: None,
        }
    }

    pub fn no_subscription(token: &str) -> Self {
        Self {
            subscription: None,
            token: Some(token.into()),
        }
    }
}

#[async_trait]
impl CredentialProvider for ScriptedCredentials {
    async fn subscription_id(&self) -> Result<String, SeedError> {
        self.subscription.clone().ok_or_else(|| {
            InfrastructureError::CommandFailed {
                command: "az account show".into(),
                code: Some(1),
                stderr: "Please run 'az login'".into(),
            }
            .into()
        })
    }

    async fn access_token(&self) -> Result<AccessToken, SeedError> {
        match &self.token {
            Some(raw) => Ok(AccessToken::new(raw.clone())?),
            None => Err(DomainError::TokenPayload("missing field 'accessToken'".into()).into()),
        }
    }
}

type Responder = Box<dyn Fn(&str) -> Option<u16> + Send + Sync>;

/// Records every statement it receives, in order, and answers with the
/// status picked by `responder` (`None` simulates a transport failure).
pub struct RecordingExecutor {
    responder: Responder,
    calls: Mutex<Vec<String>>,
}

impl RecordingExecutor {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Option<u16> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(status: u16) -> Self {
        Self::new(move |_| Some(status))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn execute(
        &self,
        _session: &Session,
        statement: &str,
    ) -> Result<QueryResponse, SeedError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(statement.to_string());
        }
        match (self.responder)(statement) {
            Some(status) => Ok(QueryResponse {
                status,
                body: format!("status {}", status),
            }),
            None => Err(InfrastructureError::Io(std::io::Error::other("connection reset")).into()),
        }
    }
}
