use std::fs;
use std::path::PathBuf;

use lakeview_core::config::{DEFAULT_CATALOG_PATH, DEFAULT_LOG_LEVEL};
use lakeview_core::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.catalog.path, PathBuf::from(DEFAULT_CATALOG_PATH));
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.tree.stop_at_datasets);
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[catalog]
path = "/data/catalog.json"

[tree]
stop_at_datasets = true
hide_homes = true

[ui]
show_wiki = false
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.catalog.path, PathBuf::from("/data/catalog.json"));
    assert!(config.tree.stop_at_datasets);
    assert!(config.tree.filter.hide_homes);
    assert!(!config.tree.filter.hide_spaces);
    assert!(!config.ui.show_wiki);

    let options = config.tree_options();
    assert!(options.stop_at_datasets);
    assert!(options.filter.hide_homes);
}

#[test]
fn test_default_string_parses_back() {
    let config: Config = toml::from_str(&Config::default_config_string()).unwrap();
    assert_eq!(config.catalog.path, PathBuf::from(DEFAULT_CATALOG_PATH));
}

#[test]
fn test_from_file_rejects_bad_level() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lakeview.toml");
    fs::write(&path, "[logging]\nlevel = \"lakeview_core=loud\"\n").unwrap();
    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_from_file_accepts_target_directive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lakeview.toml");
    fs::write(&path, "[logging]\nlevel = \"info,lakeview_core=debug\"\n").unwrap();
    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.logging.level, "info,lakeview_core=debug");
}

#[test]
fn test_from_file_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lakeview.toml");
    fs::write(&path, "[tree\n").unwrap();
    assert!(matches!(Config::from_file(&path), Err(ConfigError::ParseError(_))));
}
