//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`KAVYA_*`)
//! 2. Config file (`~/.kavya/config.toml`)
//! 3. Defaults

use crate::core::catalog::{ContentType, Length, Tone, parse_param};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Generation API configuration.
    pub api: ApiConfig,

    /// Storage configuration.
    pub storage: StorageConfig,

    /// Initial form values.
    pub defaults: DefaultsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Generation API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL that generation requests are POSTed to.
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3001/api/generate".to_string(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the key-value store.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_kavya_home(),
        }
    }
}

/// Initial form values when a flag is not given.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    pub content_type: ContentType,
    pub tone: Tone,
    pub length: Length,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for kavya's own log lines (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Get the default kavya home directory.
fn default_kavya_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".kavya"), |h| h.join(".kavya"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("KAVYA_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("KAVYA_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_kavya_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(endpoint) = env::var("KAVYA_ENDPOINT") {
        config.api.endpoint = endpoint;
    }

    if let Ok(path) = env::var("KAVYA_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("KAVYA_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    if let Ok(level) = env::var("KAVYA_LOG_LEVEL") {
        config.logging.level = level;
    }

    apply_default_overrides(&mut config.defaults, |var| env::var(var).ok());
}

/// Apply `KAVYA_DEFAULT_TYPE`, `KAVYA_DEFAULT_TONE` and `KAVYA_DEFAULT_LENGTH`.
fn apply_default_overrides(
    defaults: &mut DefaultsConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    override_default(&mut defaults.content_type, "KAVYA_DEFAULT_TYPE", "type", &lookup);
    override_default(&mut defaults.tone, "KAVYA_DEFAULT_TONE", "tone", &lookup);
    override_default(&mut defaults.length, "KAVYA_DEFAULT_LENGTH", "length", &lookup);
}

/// Values outside the catalog are logged and ignored.
fn override_default<T: FromStr>(
    target: &mut T,
    var: &str,
    field: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) {
    let Some(value) = lookup(var) else {
        return;
    };
    match parse_param(field, &value) {
        Ok(parsed) => *target = parsed,
        Err(e) => warn!(error = %e, var, "ignoring invalid default override"),
    }
}
