// azseed-core/src/infrastructure/adapters/azure_cli.rs

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::domain::AccessToken;
use crate::domain::session::CliTokenPayload;
use crate::error::SeedError;
use crate::infrastructure::config::SeedConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::credentials::CredentialProvider;

/// Credentials borrowed from the ambient `az login` state.
pub struct AzureCliCredentials {
    program: String,
    token_resource: String,
    subscription_override: Option<String>,
}

impl AzureCliCredentials {
    pub fn new(program: impl Into<String>, token_resource: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            token_resource: token_resource.into(),
            subscription_override: None,
        }
    }

    pub fn with_subscription(mut self, subscription_id: Option<String>) -> Self {
        self.subscription_override = subscription_id;
        self
    }

    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new(&config.az_program, &config.token_resource)
            .with_subscription(config.subscription_id.clone())
    }

    /// Runs the CLI and returns its stdout. Non-zero exits carry stderr.
    async fn run(&self, args: &[&str]) -> Result<String, InfrastructureError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(%command, "Invoking Azure CLI");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| InfrastructureError::CommandSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(InfrastructureError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| InfrastructureError::CommandOutput {
            command,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl CredentialProvider for AzureCliCredentials {
    #[instrument(skip(self))]
    async fn subscription_id(&self) -> Result<String, SeedError> {
        if let Some(id) = &self.subscription_override {
            debug!("Using configured subscription, skipping 'az account show'");
            return Ok(id.trim().to_string());
        }

        let stdout = self
            .run(&["account", "show", "--query", "id", "-o", "tsv"])
            .await?;
        let id = stdout.trim();
        if id.is_empty() {
            return Err(InfrastructureError::CommandOutput {
                command: format!("{} account show", self.program),
                reason: "empty subscription id".to_string(),
            }
            .into());
        }
        Ok(id.to_string())
    }

    #[instrument(skip(self), fields(resource = %self.token_resource))]
    async fn access_token(&self) -> Result<AccessToken, SeedError> {
        let stdout = self
            .run(&[
                "account",
                "get-access-token",
                "--resource",
                &self.token_resource,
            ])
            .await?;

        let token = CliTokenPayload::parse(&stdout)?.into_token()?;
        debug!(?token, "Access token acquired");
        Ok(token)
    }
}
