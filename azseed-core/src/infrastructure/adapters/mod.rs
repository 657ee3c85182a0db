// azseed-core/src/infrastructure/adapters/mod.rs

pub mod azure_cli;
pub mod rest_sql;

pub use azure_cli::AzureCliCredentials;
pub use rest_sql::{QueryTarget, RestQueryExecutor};
