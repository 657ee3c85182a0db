// azseed-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SeedError {
    // --- DOMAIN ERRORS (token, session) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, subprocess, HTTP, config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- FATAL RUN STAGES ---
    #[error("Failed to authenticate with Azure: {source}")]
    #[diagnostic(
        code(azseed::run::authentication),
        help("Run 'az login' and check that the expected subscription is selected.")
    )]
    Authentication {
        #[source]
        source: Box<SeedError>,
    },

    #[error(
        "Failed to connect to Azure SQL Database. Status: {}",
        status_label(.status)
    )]
    #[diagnostic(
        code(azseed::run::connectivity),
        help("Check the resource group, server and database names, and your role on the server.")
    )]
    Connectivity {
        status: Option<u16>,
        body: Option<String>,
        /// Transport failure when no response arrived.
        #[source]
        source: Option<Box<SeedError>>,
    },

    #[error("Error reading seed data from '{path}': {source}")]
    #[diagnostic(code(azseed::run::seed_file))]
    SeedFile {
        path: String,
        #[source]
        source: Box<SeedError>,
    },
}

impl SeedError {
    /// Wraps any failure raised while obtaining credentials.
    pub fn authentication(source: SeedError) -> Self {
        SeedError::Authentication {
            source: Box::new(source),
        }
    }

    pub fn seed_file(path: impl Into<String>, source: SeedError) -> Self {
        SeedError::SeedFile {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "No response".to_string(),
    }
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::Infrastructure(InfrastructureError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_message_without_response() {
        let err = SeedError::Connectivity {
            status: None,
            body: None,
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "Failed to connect to Azure SQL Database. Status: No response"
        );
    }

    #[test]
    fn test_connectivity_keeps_transport_cause() {
        use std::error::Error;

        let cause = SeedError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        let err = SeedError::Connectivity {
            status: None,
            body: None,
            source: Some(Box::new(cause)),
        };
        let chained = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(chained.contains("connection refused"), "{}", chained);
    }

    #[test]
    fn test_connectivity_message_with_status() {
        let err = SeedError::Connectivity {
            status: Some(403),
            body: Some("Forbidden".into()),
            source: None,
        };
        assert!(err.to_string().ends_with("Status: 403"));
    }

    #[test]
    fn test_seed_file_wraps_source() {
        let missing = SeedError::Infrastructure(InfrastructureError::SeedFileNotFound(
            "seed.sql".into(),
        ));
        let err = SeedError::seed_file("seed.sql", missing);
        assert!(err.to_string().contains("seed.sql file not found"));
    }
}
