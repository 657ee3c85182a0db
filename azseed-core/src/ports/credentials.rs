// azseed-core/src/ports/credentials.rs

// What the seeding flow needs to authenticate, without knowing where the
// credentials come from (Azure CLI today, a native SDK tomorrow).

use crate::domain::AccessToken;
use crate::error::SeedError;
use async_trait::async_trait;

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Subscription that owns the target SQL server.
    async fn subscription_id(&self) -> Result<String, SeedError>;

    /// Bearer token scoped to the SQL database resource.
    async fn access_token(&self) -> Result<AccessToken, SeedError>;
}
