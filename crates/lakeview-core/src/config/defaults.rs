//! Default values for Lakeview configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Catalog Defaults
// ============================================================================

/// Default catalog snapshot path, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "lakeview.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "lakeview";

/// File name under the user config dir.
pub const USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Tree Defaults
// ============================================================================

/// Datasets are expandable by default.
pub const DEFAULT_STOP_AT_DATASETS: bool = false;

// ============================================================================
// UI Defaults
// ============================================================================

pub const DEFAULT_SHOW_WIKI: bool = true;

pub const DEFAULT_LOCALE: &str = crate::i18n::DEFAULT_LOCALE;

/// Event loop tick in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

// ============================================================================
// Logging Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
