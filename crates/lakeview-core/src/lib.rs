//! Lakeview core: resource catalog model, node classification, selection
//! routing and browser state for a data-lake catalog.

pub mod catalog;
pub mod config;
pub mod entity;
pub mod i18n;
pub mod logging;
pub mod network;
pub mod node;
pub mod page;
pub mod selection;
pub mod tree;

pub use catalog::{CatalogError, CatalogSource, FileCatalog};
pub use config::{Config, ConfigError, LoggingConfig};
pub use entity::{EntityClass, EntityType};
pub use i18n::Messages;
pub use network::{offline_banner, Banner, BannerAppearance, NetworkStatus};
pub use node::{format_id_from_node, ResourceNode};
pub use page::{page_type_buttons, PageButtonOptions, PageType, PageTypeButton};
pub use selection::{handle_selected_node_change, is_node_expandable, SelectionHandler};
pub use tree::{graft_children, StarredTab, TreeFilter, TreeOptions, TreeState, VisibleRow};
