//! Resource catalog nodes.

use serde::{Deserialize, Serialize};

use crate::entity::EntityType;

/// One entry in the hierarchical resource catalog.
///
/// Nodes are view-model values: they are loaded from a catalog snapshot and
/// handed to the classifier and router, which never modify them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    /// Catalog type tag. Missing and unrecognised tags both become `Unknown`.
    #[serde(rename = "type", default)]
    pub entity_type: EntityType,
    pub name: String,
    /// Path from the catalog root, including this node's own name.
    #[serde(default)]
    pub full_path: Vec<String>,
    /// Children that have already been loaded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResourceNode>,
}

impl ResourceNode {
    /// Create a node with an explicit full path.
    pub fn new<I, S>(entity_type: EntityType, full_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let full_path: Vec<String> = full_path.into_iter().map(Into::into).collect();
        let name = full_path.last().cloned().unwrap_or_default();
        Self {
            entity_type,
            name,
            full_path,
            children: Vec::new(),
        }
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: ResourceNode) -> Self {
        self.children.push(child);
        self
    }

    /// The formatted id of this node.
    pub fn id(&self) -> String {
        format_id_from_node(Some(self))
    }

    /// Fill in missing full paths from the parent chain.
    ///
    /// Catalog snapshots may carry only names; this derives each node's path
    /// from its ancestors so ids stay unique across the tree.
    pub fn normalize_paths(&mut self, parent: &[String]) {
        if self.full_path.is_empty() {
            self.full_path = parent.to_vec();
            self.full_path.push(self.name.clone());
        }
        if self.name.is_empty() {
            self.name = self.full_path.last().cloned().unwrap_or_default();
        }
        let path = self.full_path.clone();
        for child in &mut self.children {
            child.normalize_paths(&path);
        }
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ResourceNode::count).sum::<usize>()
    }

    /// Depth-first search for a node by formatted id.
    pub fn find(&self, id: &str) -> Option<&ResourceNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// Format the id used to key a node in selection and expansion state.
///
/// The id is the full path rendered as a dotted SQL path. Segments that are
/// not plain identifiers are double quoted. `None` formats as the empty string.
pub fn format_id_from_node(node: Option<&ResourceNode>) -> String {
    match node {
        Some(node) => format_full_path(&node.full_path),
        None => String::new(),
    }
}

/// Render path segments as a dotted SQL path.
pub fn format_full_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| quote_segment(s.as_ref()))
        .collect::<Vec<_>>()
        .join(".")
}

fn quote_segment(segment: &str) -> String {
    let plain = segment
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        segment.to_string()
    } else {
        format!("\"{}\"", segment.replace('"', "\"\""))
    }
}
