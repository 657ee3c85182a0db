pub mod error;
pub mod report;
pub mod script;
pub mod session;

// Re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use report::{RunReport, StatementOutcome, StatementResult};
pub use script::{SeedScript, split_statements};
pub use session::{AccessToken, Session};
