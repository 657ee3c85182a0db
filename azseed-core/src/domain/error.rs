// azseed-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Access token is empty")]
    #[diagnostic(
        code(azseed::domain::empty_token),
        help("The Azure CLI returned a blank 'accessToken'. Try 'az login' again.")
    )]
    EmptyToken,

    #[error("Access token payload is invalid: {0}")]
    #[diagnostic(
        code(azseed::domain::token_payload),
        help("Expected the JSON printed by 'az account get-access-token'.")
    )]
    TokenPayload(String),

    #[error("Subscription identifier is empty")]
    #[diagnostic(
        code(azseed::domain::empty_subscription),
        help("Select a subscription with 'az account set --subscription <id>'.")
    )]
    EmptySubscription,
}
