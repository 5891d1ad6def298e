use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog has no root entries: {0}")]
    Empty(PathBuf),

    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
