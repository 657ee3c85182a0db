// azseed/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use azseed_core::infrastructure::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "azseed")]
#[command(about = "Applies supplemental seed data to an Azure SQL database", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the statements go. Unset flags fall back to azseed.yaml, then AZSEED_* variables.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Configuration file (default: ./azseed.yaml when present). A relative seed-file in it resolves next to the file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub resource_group: Option<String>,

    /// Azure SQL logical server name
    #[arg(long)]
    pub server: Option<String>,

    #[arg(long)]
    pub database: Option<String>,

    /// Subscription id (skips 'az account show')
    #[arg(long)]
    pub subscription: Option<String>,

    #[arg(long)]
    pub management_url: Option<String>,

    #[arg(long)]
    pub api_version: Option<String>,
}

impl TargetArgs {
    pub fn overrides(&self, seed_file: Option<PathBuf>, strict: bool) -> ConfigOverrides {
        ConfigOverrides {
            management_url: self.management_url.clone(),
            resource_group: self.resource_group.clone(),
            server: self.server.clone(),
            database: self.database.clone(),
            api_version: self.api_version.clone(),
            subscription_id: self.subscription.clone(),
            seed_file,
            strict,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🌱 Authenticates, tests the connection, then applies every seed statement
    Apply {
        #[command(flatten)]
        target: TargetArgs,

        /// SQL file with ';'-separated statements
        #[arg(long)]
        seed_file: Option<PathBuf>,

        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Exit with an error if any statement fails
        #[arg(long)]
        strict: bool,
    },

    /// 🔌 Authenticates and runs the connectivity test only
    Check {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// 🔍 Summarises the seed file without contacting Azure
    Inspect {
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        seed_file: Option<PathBuf>,

        /// Print every statement that would be sent
        #[arg(long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_apply_defaults() -> Result<()> {
        let args = Cli::parse_from(["azseed", "apply"]);
        match args.command {
            Commands::Apply {
                target,
                seed_file,
                report,
                strict,
            } => {
                assert!(target.config.is_none());
                assert!(target.server.is_none());
                assert_eq!(seed_file, None);
                assert_eq!(report, None);
                assert!(!strict);
                Ok(())
            }
            _ => bail!("Expected Apply command"),
        }
    }

    #[test]
    fn test_cli_parse_apply_target() -> Result<()> {
        let args = Cli::parse_from([
            "azseed",
            "apply",
            "--server",
            "sql-prod",
            "--database",
            "app",
            "--seed-file",
            "/tmp/seed.sql",
            "--strict",
        ]);
        match args.command {
            Commands::Apply {
                target,
                seed_file,
                strict,
                ..
            } => {
                let overrides = target.overrides(seed_file, strict);
                assert_eq!(overrides.server.as_deref(), Some("sql-prod"));
                assert_eq!(overrides.database.as_deref(), Some("app"));
                assert_eq!(overrides.seed_file, Some(PathBuf::from("/tmp/seed.sql")));
                assert!(overrides.strict);
                Ok(())
            }
            _ => bail!("Expected Apply command"),
        }
    }

    #[test]
    fn test_cli_parse_inspect() -> Result<()> {
        let args = Cli::parse_from(["azseed", "inspect", "--list", "-v"]);
        assert!(args.verbose);
        match args.command {
            Commands::Inspect { list, seed_file, .. } => {
                assert!(list);
                assert_eq!(seed_file, None);
                Ok(())
            }
            _ => bail!("Expected Inspect command"),
        }
    }
}
