// azseed-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(azseed::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("{0} file not found")]
    #[diagnostic(
        code(azseed::infra::seed_file_missing),
        help("Run from the directory holding the seed file, or pass --seed-file.")
    )]
    SeedFileNotFound(String),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(azseed::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(azseed::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(azseed::infra::config_invalid))]
    InvalidConfig(String),

    // --- AZURE CLI (subprocess) ---
    #[error("Could not start '{program}': {source}")]
    #[diagnostic(
        code(azseed::infra::cli_spawn),
        help("Is the Azure CLI installed and on PATH?")
    )]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with status {}: {stderr}", exit_label(.code))]
    #[diagnostic(code(azseed::infra::cli_failed))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'{command}' produced unusable output: {reason}")]
    #[diagnostic(code(azseed::infra::cli_output))]
    CommandOutput { command: String, reason: String },

    // --- HTTP / JSON ---
    #[error("HTTP Error: {0}")]
    #[diagnostic(
        code(azseed::infra::http),
        help("The request never produced a response (DNS, TLS or connection failure).")
    )]
    Http(#[from] reqwest::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(azseed::infra::json))]
    Json(#[from] serde_json::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}
