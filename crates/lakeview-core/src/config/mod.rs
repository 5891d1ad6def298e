//! Configuration management for Lakeview.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `lakeview.toml` file
//! 3. User config `~/.config/lakeview/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::tree::{TreeFilter, TreeOptions};

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog snapshot location.
    pub catalog: CatalogConfig,

    /// Tree traversal and visibility.
    pub tree: TreeConfig,

    /// Presentation settings.
    pub ui: UiConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./lakeview.toml` (project local)
    /// 2. `~/.config/lakeview/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LAKEVIEW_CATALOG") {
            self.catalog.path = PathBuf::from(path);
        }
        if let Some(flag) = env_flag("LAKEVIEW_STOP_AT_DATASETS") {
            self.tree.stop_at_datasets = flag;
        }
        if let Some(flag) = env_flag("LAKEVIEW_SHOW_WIKI") {
            self.ui.show_wiki = flag;
        }
        if let Ok(locale) = std::env::var("LAKEVIEW_LOCALE") {
            self.ui.locale = locale;
        }
        if let Ok(level) = std::env::var("LAKEVIEW_LOG") {
            self.logging.level = level;
        }
        if let Ok(file) = std::env::var("LAKEVIEW_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("catalog.path must not be empty".to_string()));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid(format!(
                "logging.level '{}' is not a valid filter: {}",
                self.logging.level, e
            )));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }

    /// Tree options derived from the `[tree]` section.
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            stop_at_datasets: self.tree.stop_at_datasets,
            filter: self.tree.filter,
            ..TreeOptions::default()
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the JSON catalog snapshot.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

/// Tree configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Treat datasets as leaves.
    pub stop_at_datasets: bool,

    /// Entry kinds to hide.
    #[serde(flatten)]
    pub filter: TreeFilter,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            stop_at_datasets: DEFAULT_STOP_AT_DATASETS,
            filter: TreeFilter::default(),
        }
    }
}

/// Presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the wiki page button.
    pub show_wiki: bool,

    /// Message locale.
    pub locale: String,

    /// Event loop tick in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_wiki: DEFAULT_SHOW_WIKI,
            locale: DEFAULT_LOCALE.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or filter directives, e.g. `info` or `lakeview_core=debug,warn`.
    pub level: String,

    /// Log file. When unset, logs go to stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}
