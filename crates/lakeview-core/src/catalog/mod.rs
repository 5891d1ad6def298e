mod error;
mod file;

pub use error::CatalogError;
pub use file::FileCatalog;

use crate::node::ResourceNode;

/// Trait for catalog backends.
///
/// The browser loads the top level eagerly and the rest lazily, one
/// expanded node at a time.
pub trait CatalogSource {
    /// Loads the top-level entries, without their children.
    fn load_roots(&self) -> Result<Vec<ResourceNode>, CatalogError>;

    /// Loads the direct children of the node at `full_path`, without grandchildren.
    fn load_children(&self, full_path: &[String]) -> Result<Vec<ResourceNode>, CatalogError>;
}
