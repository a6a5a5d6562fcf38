//! # Configuration
//!
//! Application settings, layered from defaults, an optional TOML file and
//! `RENTAL__*` environment variables (double underscore separates nested
//! keys, e.g. `RENTAL__BROKER__MAX_CONCURRENT_QUERIES=4`).

use crate::application::services::BrokerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "RENTAL";
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config/default", "../config/default"];

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range.
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// Single line per event.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Fleet data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Directory relative fleet file names are resolved against.
    pub data_dir: PathBuf,
    /// Fleet files loaded at startup.
    pub files: Vec<PathBuf>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: Vec::new(),
        }
    }
}

impl FleetConfig {
    /// Returns the configured fleet files resolved against `data_dir`.
    #[must_use]
    pub fn resolved_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .map(|f| {
                if f.is_absolute() {
                    f.clone()
                } else {
                    self.data_dir.join(f)
                }
            })
            .collect()
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Fleet data settings.
    pub fleet: FleetConfig,
    /// Broker settings.
    pub broker: BrokerConfig,
}

impl AppConfig {
    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        if self.broker.max_concurrent_queries == 0 {
            return Err(ConfigError::Validation(
                "broker.max_concurrent_queries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads the configuration.
///
/// Sources, later ones overriding earlier ones:
///
/// 1. built-in defaults
/// 2. `config/default.toml` (or `../config/default.toml`) if present
/// 3. `config_path`, if given and present
/// 4. `RENTAL__*` environment variables, after loading `.env` if one exists
///
/// # Errors
///
/// Returns `ConfigError::Load` if a source is malformed and
/// `ConfigError::Validation` if a value is out of range.
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let _ = dotenvy::dotenv();

    let mut builder = config::Config::builder();

    for name in DEFAULT_CONFIG_FILES {
        if Path::new(&format!("{name}.toml")).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(path) = config_path {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("fleet.files"),
    );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
