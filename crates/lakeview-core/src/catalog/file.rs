use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::node::{format_full_path, ResourceNode};

use super::error::CatalogError;
use super::CatalogSource;

/// Catalog backed by a JSON snapshot on disk.
///
/// The snapshot is either a list of root nodes or an object with a
/// `resources` list:
/// ```text
/// { "resources": [
///     { "type": "SPACE", "name": "Sales", "children": [
///         { "type": "VIRTUAL_DATASET", "name": "orders" } ] } ] }
/// ```
/// Missing `fullPath` values are derived from the parent chain.
pub struct FileCatalog {
    path: PathBuf,
    roots: Vec<ResourceNode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Wrapped { resources: Vec<ResourceNode> },
    Bare(Vec<ResourceNode>),
}

impl FileCatalog {
    /// Reads and parses the snapshot at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|e| CatalogError::io(&path, e))?;
        let catalog = Self::from_json(&path, &content)?;
        info!(
            path = %path.display(),
            roots = catalog.roots.len(),
            nodes = catalog.node_count(),
            "loaded catalog snapshot"
        );
        Ok(catalog)
    }

    /// Parses a snapshot that was already read into memory.
    pub fn from_json(path: impl Into<PathBuf>, content: &str) -> Result<Self, CatalogError> {
        let path = path.into();
        let mut roots = match serde_json::from_str(content)? {
            Snapshot::Wrapped { resources } => resources,
            Snapshot::Bare(roots) => roots,
        };
        if roots.is_empty() {
            return Err(CatalogError::Empty(path));
        }
        for root in &mut roots {
            root.normalize_paths(&[]);
        }
        Ok(Self { path, roots })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The complete snapshot, children included.
    pub fn snapshot(&self) -> &[ResourceNode] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(ResourceNode::count).sum()
    }

    fn find(&self, full_path: &[String]) -> Option<&ResourceNode> {
        let mut level = self.roots.as_slice();
        let mut found = None;
        for depth in 1..=full_path.len() {
            let prefix = &full_path[..depth];
            let node = level.iter().find(|n| n.full_path == prefix)?;
            level = &node.children;
            found = Some(node);
        }
        found
    }
}

fn shallow(node: &ResourceNode) -> ResourceNode {
    ResourceNode {
        children: Vec::new(),
        ..node.clone()
    }
}

impl CatalogSource for FileCatalog {
    fn load_roots(&self) -> Result<Vec<ResourceNode>, CatalogError> {
        Ok(self.roots.iter().map(shallow).collect())
    }

    fn load_children(&self, full_path: &[String]) -> Result<Vec<ResourceNode>, CatalogError> {
        let node = self
            .find(full_path)
            .ok_or_else(|| CatalogError::NodeNotFound(format_full_path(full_path)))?;
        Ok(node.children.iter().map(shallow).collect())
    }
}
