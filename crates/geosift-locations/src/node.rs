//! Core location node types.

use serde::{Deserialize, Serialize};

/// One node of the static location tree, as loaded from configuration.
///
/// IDs are unique across the whole tree. An empty `children` list marks a
/// leaf; interior nodes are regions or countries that group the nodes
/// below them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LocationNode>,
}

impl LocationNode {
    /// Create a leaf node.
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    /// Create an interior node with ordered children.
    pub fn with_children(id: &str, label: &str, children: Vec<LocationNode>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
