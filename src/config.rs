//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Alias document bundled with the crate, used when no path is configured
pub const BUNDLED_ALIASES: &str = include_str!("../config/enchant_aliases.json");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Alias document path (bundled document when unset)
    pub alias_table_path: Option<PathBuf>,

    /// Environment (development, production)
    pub environment: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Level used by `/enchant <name>` when no level is given
    pub default_enchant_level: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let alias_table_path = env::var_os("ALIAS_TABLE_PATH").map(PathBuf::from);

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => return Err(ConfigError::InvalidValue("LOG_FORMAT")),
        };

        let default_enchant_level = env::var("DEFAULT_ENCHANT_LEVEL")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .ok()
            .filter(|level: &i32| *level >= 1)
            .ok_or(ConfigError::InvalidValue("DEFAULT_ENCHANT_LEVEL"))?;

        Ok(Self {
            alias_table_path,
            environment,
            log_format,
            default_enchant_level,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alias_table_path: None,
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
            default_enchant_level: 1,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed alias table: {0}")]
    MalformedAliasTable(#[from] serde_json::Error),

    #[error("Alias table is empty")]
    EmptyAliasTable,

    #[error("Alias group {group:?} contains an empty synonym")]
    EmptySynonym { group: String },

    #[error("Alias {alias:?} maps to both {first} and {second}")]
    ConflictingAlias {
        alias: String,
        first: String,
        second: String,
    },
}
