//! Structured logging setup using `tracing`.
//!
//! Logs go to the configured file when one is set. Otherwise they go to
//! stderr, unless the terminal is owned by the TUI, in which case they are
//! dropped.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },

    #[error("Failed to open log file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialized: {0}")]
    Init(String),
}

/// Whether stderr is free for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Plain command output; stderr may carry logs.
    Shared,
    /// A full-screen UI owns the terminal.
    Owned,
}

/// Build the level filter. `RUST_LOG` wins over the configured level.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::Filter {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig, terminal: Terminal) -> Result<(), LoggingError> {
    let filter = build_env_filter(config)?;
    let base = Registry::default().with(filter);

    let result = match (&config.file, terminal) {
        (Some(path), _) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| LoggingError::File {
                    path: path.clone(),
                    source,
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::File {
                    path: path.clone(),
                    source,
                })?;
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
        }
        (None, Terminal::Shared) => base
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        (None, Terminal::Owned) => base
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init(),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: None,
        };
        assert!(build_env_filter(&config).is_ok());
    }

    #[test]
    fn test_file_logging_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("lakeview.log");
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(path.clone()),
        };
        init_logging(&config, Terminal::Owned).unwrap();
        tracing::info!("hello");
        assert!(path.exists());
    }
}
