// azseed-core/src/application/authenticate.rs

use tracing::{debug, info, instrument};

use crate::domain::Session;
use crate::error::SeedError;
use crate::ports::CredentialProvider;

/// START -> AUTHENTICATED.
///
/// Any failure (missing CLI, non-zero exit, bad JSON, missing field) comes
/// back as [`SeedError::Authentication`]; the caller must abort.
#[instrument(skip(provider))]
pub async fn authenticate<C>(provider: &C) -> Result<Session, SeedError>
where
    C: CredentialProvider + ?Sized,
{
    println!("🔄 Getting Azure authentication token...");

    let attempt = async {
        let token = provider.access_token().await?;
        let subscription_id = provider.subscription_id().await?;
        Ok::<_, SeedError>(Session::new(subscription_id, token)?)
    }
    .await;

    match attempt {
        Ok(session) => {
            info!(subscription = %session.subscription_id, "Authenticated");
            Ok(session)
        }
        Err(e) => {
            debug!("Authentication failed: {}", e);
            Err(SeedError::authentication(e))
        }
    }
}
