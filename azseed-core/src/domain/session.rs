// azseed-core/src/domain/session.rs

use serde::Deserialize;
use std::fmt;

use crate::domain::error::DomainError;

/// Bearer credential presented on every query.
///
/// Obtained once per run and never refreshed: if it expires mid-run,
/// the remaining requests fail like any other statement.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyToken);
        }
        Ok(Self(raw))
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

// Never leak the secret into logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(*** {} chars)", self.0.len())
    }
}

/// JSON printed by `az account get-access-token`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliTokenPayload {
    pub access_token: Option<String>,
    pub expires_on: Option<String>,
    pub token_type: Option<String>,
    pub subscription: Option<String>,
    pub tenant: Option<String>,
}

impl CliTokenPayload {
    pub fn parse(stdout: &str) -> Result<Self, DomainError> {
        serde_json::from_str(stdout).map_err(|e| DomainError::TokenPayload(e.to_string()))
    }

    pub fn into_token(self) -> Result<AccessToken, DomainError> {
        let raw = self
            .access_token
            .ok_or_else(|| DomainError::TokenPayload("missing field 'accessToken'".into()))?;
        AccessToken::new(raw)
    }
}

/// Everything a query needs: where to send it and how to authenticate.
#[derive(Debug, Clone)]
pub struct Session {
    pub subscription_id: String,
    pub token: AccessToken,
}

impl Session {
    pub fn new(subscription_id: impl Into<String>, token: AccessToken) -> Result<Self, DomainError> {
        let subscription_id = subscription_id.into().trim().to_string();
        if subscription_id.is_empty() {
            return Err(DomainError::EmptySubscription);
        }
        Ok(Self {
            subscription_id,
            token,
        })
    }
}
