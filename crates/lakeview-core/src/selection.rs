//! Node classification and selection routing.
//!
//! These are the two predicates the tree view consults on every interaction:
//! whether a node shows an expand affordance, and where a selection event on
//! a node is dispatched.

use tracing::debug;

use crate::node::{format_id_from_node, ResourceNode};
use crate::tree::TreeOptions;

/// Returns true if the node can be expanded.
///
/// Container types are always expandable. Dataset types are expandable
/// unless `stop_at_datasets` is set. Anything else never is.
pub fn is_node_expandable(node: &ResourceNode, stop_at_datasets: bool) -> bool {
    let entity_type = node.entity_type;
    entity_type.is_container() || (entity_type.is_dataset() && !stop_at_datasets)
}

/// Receiver of routed selection events.
///
/// Implementations own whatever state the events mutate (expanded nodes,
/// loading markers, the current selection).
pub trait SelectionHandler {
    /// Called for expandable nodes only.
    fn on_node_click(&mut self, node: &ResourceNode, is_node_expanded: bool);

    /// Called once for every selection, including deselection (`node` is `None`).
    fn on_selection_change(&mut self, id: String, node: Option<&ResourceNode>);

    /// Formats the id passed to `on_selection_change`.
    fn format_id(&self, node: Option<&ResourceNode>) -> String {
        format_id_from_node(node)
    }
}

/// Route a selection event on `node`.
///
/// Expandable nodes are first forwarded to [`SelectionHandler::on_node_click`];
/// the selection change is then reported unconditionally.
pub fn handle_selected_node_change<H>(
    node: Option<&ResourceNode>,
    is_node_expanded: bool,
    options: &TreeOptions,
    handler: &mut H,
) where
    H: SelectionHandler + ?Sized,
{
    if let Some(node) = node {
        if is_node_expandable(node, options.stop_at_datasets) {
            debug!(name = %node.name, expanded = is_node_expanded, "routing node click");
            handler.on_node_click(node, is_node_expanded);
        }
    }

    let id = handler.format_id(node);
    debug!(id = %id, cleared = node.is_none(), "selection changed");
    handler.on_selection_change(id, node);
}
