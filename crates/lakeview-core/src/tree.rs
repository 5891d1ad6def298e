//! Resource tree state and visible row flattening.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{EntityClass, EntityType};
use crate::node::ResourceNode;
use crate::selection::{is_node_expandable, SelectionHandler};

/// Which nodes the tree shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeFilter {
    pub hide_datasets: bool,
    pub hide_spaces: bool,
    pub hide_sources: bool,
    pub hide_homes: bool,
}

impl TreeFilter {
    /// Returns true if the node (and with it its subtree) is hidden.
    pub fn hides(&self, node: &ResourceNode) -> bool {
        match node.entity_type {
            EntityType::Space => self.hide_spaces,
            EntityType::Source => self.hide_sources,
            EntityType::Home => self.hide_homes,
            t => self.hide_datasets && t.class() == EntityClass::Dataset,
        }
    }
}

/// Tab above the tree: the whole catalog or only starred nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StarredTab {
    #[default]
    All,
    Starred,
}

impl StarredTab {
    pub fn toggle(self) -> Self {
        match self {
            Self::All => Self::Starred,
            Self::Starred => Self::All,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Starred => "Starred",
        }
    }
}

/// Options the tree is rendered and routed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Treat dataset nodes as leaves.
    pub stop_at_datasets: bool,
    pub filter: TreeFilter,
    pub starred_tab: StarredTab,
}

/// One line of the flattened tree.
#[derive(Debug, Clone)]
pub struct VisibleRow<'a> {
    pub node: &'a ResourceNode,
    pub id: String,
    /// Zero based depth. Depth 0 means top level with no indentation.
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
    pub starred: bool,
    pub loading: bool,
}

/// Mutable browser state: expanded nodes, selection, stars, pending loads.
///
/// This is the store the selection router reports into.
#[derive(Debug, Clone, Default)]
pub struct TreeState {
    expanded: BTreeSet<String>,
    selected: Option<String>,
    starred: BTreeSet<String>,
    loading: BTreeSet<String>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_node_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand(&mut self, id: impl Into<String>) {
        self.expanded.insert(id.into());
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    /// Expand every expandable node in the given subtrees.
    pub fn expand_all(&mut self, roots: &[ResourceNode], stop_at_datasets: bool) {
        for node in roots {
            if is_node_expandable(node, stop_at_datasets) {
                self.expanded.insert(node.id());
                self.expand_all(&node.children, stop_at_datasets);
            }
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selection formatted for insertion into an editor.
    pub fn selected_path(&self) -> Option<String> {
        self.selected.clone()
    }

    pub fn is_starred(&self, id: &str) -> bool {
        self.starred.contains(id)
    }

    pub fn star(&mut self, id: impl Into<String>) {
        self.starred.insert(id.into());
    }

    pub fn unstar(&mut self, id: &str) {
        self.starred.remove(id);
    }

    /// Flip the star on a node. Returns the new state.
    pub fn toggle_star(&mut self, id: &str) -> bool {
        if self.starred.remove(id) {
            false
        } else {
            self.starred.insert(id.to_string());
            true
        }
    }

    pub fn starred(&self) -> impl Iterator<Item = &str> {
        self.starred.iter().map(String::as_str)
    }

    pub fn is_loading(&self, id: &str) -> bool {
        self.loading.contains(id)
    }

    /// Ids waiting for their children to be loaded.
    pub fn pending_loads(&self) -> Vec<String> {
        self.loading.iter().cloned().collect()
    }

    pub fn finish_loading(&mut self, id: &str) {
        self.loading.remove(id);
    }

    /// Flatten the roots into the rows currently visible.
    ///
    /// On the starred tab every starred node becomes a depth 0 row, except
    /// one already shown inside the expanded subtree of a starred ancestor.
    pub fn visible_rows<'a>(
        &self,
        roots: &'a [ResourceNode],
        options: &TreeOptions,
    ) -> Vec<VisibleRow<'a>> {
        let mut rows = Vec::new();
        match options.starred_tab {
            StarredTab::All => {
                for node in roots {
                    self.push_rows(node, 0, options, &mut rows);
                }
            }
            StarredTab::Starred => {
                let mut starred = Vec::new();
                collect_starred(roots, &self.starred, &options.filter, &mut starred);
                for node in starred {
                    let id = node.id();
                    if rows.iter().any(|row| row.id == id) {
                        continue;
                    }
                    self.push_rows(node, 0, options, &mut rows);
                }
            }
        }
        rows
    }

    fn push_rows<'a>(
        &self,
        node: &'a ResourceNode,
        depth: usize,
        options: &TreeOptions,
        rows: &mut Vec<VisibleRow<'a>>,
    ) {
        if options.filter.hides(node) {
            return;
        }

        let id = node.id();
        let expandable = is_node_expandable(node, options.stop_at_datasets);
        let expanded = expandable && self.expanded.contains(&id);
        rows.push(VisibleRow {
            node,
            depth,
            expandable,
            expanded,
            starred: self.starred.contains(&id),
            loading: self.loading.contains(&id),
            id,
        });

        if expanded {
            for child in &node.children {
                self.push_rows(child, depth + 1, options, rows);
            }
        }
    }
}

fn collect_starred<'a>(
    nodes: &'a [ResourceNode],
    starred: &BTreeSet<String>,
    filter: &TreeFilter,
    out: &mut Vec<&'a ResourceNode>,
) {
    for node in nodes {
        if filter.hides(node) {
            continue;
        }
        if starred.contains(&node.id()) {
            out.push(node);
        }
        collect_starred(&node.children, starred, filter, out);
    }
}

impl SelectionHandler for TreeState {
    fn on_node_click(&mut self, node: &ResourceNode, is_node_expanded: bool) {
        let id = node.id();
        if is_node_expanded {
            debug!(id = %id, "collapsing node");
            self.expanded.remove(&id);
        } else {
            debug!(id = %id, loaded = !node.children.is_empty(), "expanding node");
            if node.children.is_empty() {
                self.loading.insert(id.clone());
            }
            self.expanded.insert(id);
        }
    }

    fn on_selection_change(&mut self, id: String, node: Option<&ResourceNode>) {
        self.selected = node.map(|_| id);
    }
}

/// Replace the children of the node at `full_path`.
///
/// Returns false if no node has that path.
pub fn graft_children(
    roots: &mut [ResourceNode],
    full_path: &[String],
    children: Vec<ResourceNode>,
) -> bool {
    match find_mut(roots, full_path) {
        Some(node) => {
            node.children = children;
            true
        }
        None => false,
    }
}

fn find_mut<'a>(nodes: &'a mut [ResourceNode], full_path: &[String]) -> Option<&'a mut ResourceNode> {
    for node in nodes {
        if node.full_path == full_path {
            return Some(node);
        }
        // An empty path is a prefix of every path; never descend through it.
        if !node.full_path.is_empty() && full_path.starts_with(&node.full_path) {
            if let Some(found) = find_mut(&mut node.children, full_path) {
                return Some(found);
            }
        }
    }
    None
}
