// azseed-core/src/ports/mod.rs

pub mod credentials;
pub mod executor;

pub use credentials::CredentialProvider;
pub use executor::{QueryExecutor, QueryResponse};
