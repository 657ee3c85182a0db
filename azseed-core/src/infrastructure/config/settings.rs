// azseed-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::{Validate, ValidationError};

use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["azseed.yaml", "azseed.yml"];

/// Everything the seeding run needs to know about its target.
///
/// Layered: defaults < YAML file < `AZSEED_*` environment < CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct SeedConfig {
    #[validate(url(message = "management-url must be an absolute URL"))]
    pub management_url: String,

    #[validate(length(min = 1, message = "resource-group cannot be empty"))]
    pub resource_group: String,

    #[validate(length(min = 1, message = "server cannot be empty"))]
    pub server: String,

    #[validate(length(min = 1, message = "database cannot be empty"))]
    pub database: String,

    #[validate(length(min = 1, message = "api-version cannot be empty"))]
    pub api_version: String,

    /// Resource the bearer token is requested for.
    #[validate(length(min = 1, message = "token-resource cannot be empty"))]
    pub token_resource: String,

    /// Azure CLI executable.
    #[validate(length(min = 1, message = "az-program cannot be empty"))]
    pub az_program: String,

    /// Skips `az account show` when set.
    pub subscription_id: Option<String>,

    pub seed_file: PathBuf,

    #[validate(custom(function = "validate_not_blank", message = "test-query cannot be blank"))]
    pub test_query: String,

    /// `None` keeps the HTTP client default (no timeout).
    pub request_timeout_secs: Option<u64>,

    /// Exit non-zero when any statement fails.
    pub strict: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            management_url: "https://management.azure.com".to_string(),
            resource_group: "rg-baap-dev".to_string(),
            server: "baap-dev-sql-wsnmnw".to_string(),
            database: "baap_dev".to_string(),
            api_version: "2020-11-01-preview".to_string(),
            token_resource: "https://database.windows.net/".to_string(),
            az_program: "az".to_string(),
            subscription_id: None,
            seed_file: PathBuf::from("azure_supplement_seed_data.sql"),
            test_query: "SELECT COUNT(*) as TimelineCount FROM ProjectTimelineItems".to_string(),
            request_timeout_secs: None,
            strict: false,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Values given on the command line. `None` leaves the layer below untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub management_url: Option<String>,
    pub resource_group: Option<String>,
    pub server: Option<String>,
    pub database: Option<String>,
    pub api_version: Option<String>,
    pub subscription_id: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub strict: bool,
}

impl SeedConfig {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.management_url {
            self.management_url = v;
        }
        if let Some(v) = overrides.resource_group {
            self.resource_group = v;
        }
        if let Some(v) = overrides.server {
            self.server = v;
        }
        if let Some(v) = overrides.database {
            self.database = v;
        }
        if let Some(v) = overrides.api_version {
            self.api_version = v;
        }
        if let Some(v) = overrides.subscription_id {
            self.subscription_id = Some(v);
        }
        if let Some(v) = overrides.seed_file {
            self.seed_file = v;
        }
        // A flag can only switch strict mode on.
        self.strict |= overrides.strict;
    }

    pub fn validated(self) -> Result<Self, InfrastructureError> {
        self.validate()
            .map_err(|e| InfrastructureError::InvalidConfig(e.to_string()))?;
        Ok(self)
    }
}

// --- LOADER ---

/// Loads the configuration from `explicit` (which must exist) or from the
/// first candidate file in `base_dir`, falling back to defaults, then applies
/// environment overrides.
#[instrument(skip(base_dir))]
pub fn load_seed_config(
    base_dir: &Path,
    explicit: Option<&Path>,
) -> Result<SeedConfig, InfrastructureError> {
    let config_path = match explicit {
        Some(path) if path.exists() => Some(path.to_path_buf()),
        Some(path) => {
            return Err(InfrastructureError::ConfigNotFound(
                path.display().to_string(),
            ));
        }
        None => find_config(base_dir),
    };

    let mut config = match config_path {
        Some(path) => {
            info!(path = ?path, "Loading seed configuration");
            let mut config = parse_config(&fs::read_to_string(&path)?)?;
            anchor_seed_file(&mut config, &path);
            config
        }
        None => SeedConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

/// A relative `seed-file` read from a YAML file points next to that file.
fn anchor_seed_file(config: &mut SeedConfig, config_path: &Path) {
    if config.seed_file.is_absolute() {
        return;
    }
    if let Some(dir) = config_path.parent() {
        config.seed_file = dir.join(&config.seed_file);
    }
}

fn parse_config(content: &str) -> Result<SeedConfig, InfrastructureError> {
    if content.trim().is_empty() {
        return Ok(SeedConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// `lookup` is `std::env::var` outside of tests.
///
/// Values that do not parse are rejected rather than ignored.
pub fn apply_env_overrides<F>(
    config: &mut SeedConfig,
    lookup: F,
) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let string_vars: [(&str, &mut String); 7] = [
        ("AZSEED_MANAGEMENT_URL", &mut config.management_url),
        ("AZSEED_RESOURCE_GROUP", &mut config.resource_group),
        ("AZSEED_SERVER", &mut config.server),
        ("AZSEED_DATABASE", &mut config.database),
        ("AZSEED_API_VERSION", &mut config.api_version),
        ("AZSEED_TOKEN_RESOURCE", &mut config.token_resource),
        ("AZSEED_AZ_PROGRAM", &mut config.az_program),
    ];
    for (key, slot) in string_vars {
        if let Some(val) = lookup(key) {
            info!(key, new = ?val, "Overriding setting via ENV");
            *slot = val;
        }
    }

    if let Some(val) = lookup("AZSEED_TEST_QUERY") {
        config.test_query = val;
    }
    if let Some(val) = lookup("AZSEED_SUBSCRIPTION_ID") {
        config.subscription_id = Some(val);
    }
    if let Some(val) = lookup("AZSEED_SEED_FILE") {
        config.seed_file = PathBuf::from(val);
    }
    if let Some(val) = lookup("AZSEED_REQUEST_TIMEOUT_SECS") {
        let secs = val.trim().parse::<u64>().map_err(|_| {
            InfrastructureError::InvalidConfig(format!(
                "AZSEED_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                val
            ))
        })?;
        config.request_timeout_secs = Some(secs);
    }
    if let Some(val) = lookup("AZSEED_STRICT") {
        config.strict = parse_flag("AZSEED_STRICT", &val)?;
    }

    Ok(())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, InfrastructureError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(InfrastructureError::InvalidConfig(format!(
            "{} must be one of 1/true/yes/on or 0/false/no/off, got '{}'",
            key, value
        ))),
    }
}
