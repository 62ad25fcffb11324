//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml`). Every key is optional.

use thiserror::Error;

const RUN_MIGRATIONS: &str = "RUN_MIGRATIONS";
const SEED_CATEGORIES: &str = "SEED_CATEGORIES";
const CORS_PERMISSIVE: &str = "CORS_PERMISSIVE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Apply pending sqlx migrations at startup
    pub run_migrations: bool,
    /// Insert the default categories when none exist
    pub seed_categories: bool,
    /// Mount a permissive CORS layer
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            run_migrations: true,
            seed_categories: false,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            run_migrations: read_bool(&lookup, RUN_MIGRATIONS, defaults.run_migrations)?,
            seed_categories: read_bool(&lookup, SEED_CATEGORIES, defaults.seed_categories)?,
            cors_permissive: read_bool(&lookup, CORS_PERMISSIVE, defaults.cors_permissive)?,
        })
    }
}

fn read_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value: raw }),
    }
}
