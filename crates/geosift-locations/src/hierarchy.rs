//! In-memory location hierarchy with index-based traversal.

use std::collections::HashMap;

use thiserror::Error;

use crate::node::LocationNode;

/// Errors building the static hierarchy from configuration.
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("duplicate node id: {0}")]
    DuplicateId(String),
    #[error("invalid hierarchy JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One arena entry. Parent and children are arena indices.
#[derive(Debug, Clone)]
struct NodeEntry {
    id: String,
    label: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Resolved view of one node in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub is_leaf: bool,
}

/// The static location tree, flattened into an arena.
///
/// Nodes are addressed by index; every traversal operates purely on
/// indices, so the tree carries no reference cycles. Unknown IDs yield
/// empty results, never an error.
#[derive(Debug, Clone, Default)]
pub struct LocationHierarchy {
    nodes: Vec<NodeEntry>,
    index: HashMap<String, usize>,
}

impl LocationHierarchy {
    /// Build a hierarchy from configured root nodes.
    ///
    /// Rejects duplicate IDs so the ID → node index stays unambiguous.
    pub fn from_roots(roots: &[LocationNode]) -> Result<Self, HierarchyError> {
        let mut hierarchy = Self::default();
        for root in roots {
            hierarchy.insert_subtree(root, None)?;
        }
        Ok(hierarchy)
    }

    /// Build a hierarchy from a JSON array of root nodes.
    pub fn from_json(json: &str) -> Result<Self, HierarchyError> {
        let roots: Vec<LocationNode> = serde_json::from_str(json)?;
        Self::from_roots(&roots)
    }

    fn insert_subtree(
        &mut self,
        node: &LocationNode,
        parent: Option<usize>,
    ) -> Result<usize, HierarchyError> {
        if self.index.contains_key(&node.id) {
            return Err(HierarchyError::DuplicateId(node.id.clone()));
        }

        let index = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: node.id.clone(),
            label: node.label.clone(),
            parent,
            children: Vec::new(),
        });
        self.index.insert(node.id.clone(), index);

        for child in &node.children {
            let child_index = self.insert_subtree(child, Some(index))?;
            self.nodes[index].children.push(child_index);
        }

        Ok(index)
    }

    /// Look up a node by ID.
    pub fn get(&self, id: &str) -> Option<NodeView<'_>> {
        self.index.get(id).map(|&i| {
            let entry = &self.nodes[i];
            NodeView {
                id: entry.id.as_str(),
                label: entry.label.as_str(),
                is_leaf: entry.children.is_empty(),
            }
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// IDs of all root nodes, in configuration order.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.parent.is_none())
            .map(|n| n.id.as_str())
            .collect()
    }

    /// The node itself plus every descendant, depth-first.
    pub fn descendant_ids(&self, id: &str) -> Vec<&str> {
        let mut result = Vec::new();
        if let Some(&index) = self.index.get(id) {
            self.collect_subtree(index, &mut result);
        }
        result
    }

    fn collect_subtree<'a>(&'a self, index: usize, result: &mut Vec<&'a str>) {
        result.push(self.nodes[index].id.as_str());
        for &child in &self.nodes[index].children {
            self.collect_subtree(child, result);
        }
    }

    /// Deduplicated union of `descendant_ids` over every input ID,
    /// in first-seen order. Expanding an already-expanded list returns
    /// the same sequence.
    pub fn expand_selection<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();
        for id in ids {
            for descendant in self.descendant_ids(id) {
                if seen.insert(descendant) {
                    result.push(descendant.to_string());
                }
            }
        }
        result
    }

    /// The single parent ID; None for roots and unknown IDs.
    pub fn parent_id(&self, id: &str) -> Option<&str> {
        let &index = self.index.get(id)?;
        self.nodes[index]
            .parent
            .map(|p| self.nodes[p].id.as_str())
    }

    /// Ordered immediate children; empty for leaves and unknown IDs.
    pub fn child_ids(&self, id: &str) -> Vec<&str> {
        self.index
            .get(id)
            .map(|&i| {
                self.nodes[i]
                    .children
                    .iter()
                    .map(|&c| self.nodes[c].id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ancestors from immediate parent up to the root; empty for roots
    /// and unknown IDs.
    pub fn ancestor_ids(&self, id: &str) -> Vec<&str> {
        let mut result = Vec::new();
        let Some(&index) = self.index.get(id) else {
            return result;
        };
        let mut current = self.nodes[index].parent;
        while let Some(i) = current {
            result.push(self.nodes[i].id.as_str());
            current = self.nodes[i].parent;
        }
        result
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LocationNode;

    fn sample_hierarchy() -> LocationHierarchy {
        let roots = vec![
            LocationNode::with_children(
                "north-america",
                "North America",
                vec![
                    LocationNode::with_children(
                        "us",
                        "United States",
                        vec![
                            LocationNode::new("us-ca", "California"),
                            LocationNode::new("us-or", "Oregon"),
                            LocationNode::new("us-wa", "Washington"),
                            LocationNode::new("us-id", "Idaho"),
                        ],
                    ),
                    LocationNode::with_children(
                        "canada",
                        "Canada",
                        vec![
                            LocationNode::new("ca-bc", "British Columbia"),
                            LocationNode::new("ca-ab", "Alberta"),
                        ],
                    ),
                ],
            ),
            LocationNode::with_children(
                "europe",
                "Europe",
                vec![LocationNode::new("de", "Germany")],
            ),
        ];
        LocationHierarchy::from_roots(&roots).unwrap()
    }

    #[test]
    fn roots_in_config_order() {
        let h = sample_hierarchy();
        assert_eq!(h.roots(), vec!["north-america", "europe"]);
    }

    #[test]
    fn get_resolves_nodes() {
        let h = sample_hierarchy();
        let node = h.get("us").unwrap();
        assert_eq!(node.label, "United States");
        assert!(!node.is_leaf);
        assert!(h.get("us-or").unwrap().is_leaf);
        assert!(h.get("atlantis").is_none());
    }

    #[test]
    fn descendants_include_self_depth_first() {
        let h = sample_hierarchy();
        assert_eq!(
            h.descendant_ids("us"),
            vec!["us", "us-ca", "us-or", "us-wa", "us-id"]
        );
        assert_eq!(h.descendant_ids("de"), vec!["de"]);
        assert!(h.descendant_ids("atlantis").is_empty());
    }

    #[test]
    fn expand_selection_deduplicates() {
        let h = sample_hierarchy();
        let expanded = h.expand_selection(["us", "us-ca"]);
        assert_eq!(expanded, vec!["us", "us-ca", "us-or", "us-wa", "us-id"]);
    }

    #[test]
    fn expand_selection_is_idempotent() {
        let h = sample_hierarchy();
        let once = h.expand_selection(["north-america", "de"]);
        let twice = h.expand_selection(once.iter().map(String::as_str));
        assert_eq!(once, twice);
    }

    #[test]
    fn parent_and_children() {
        let h = sample_hierarchy();
        assert_eq!(h.parent_id("us-ca"), Some("us"));
        assert_eq!(h.parent_id("europe"), None);
        assert_eq!(h.parent_id("atlantis"), None);

        assert_eq!(h.child_ids("canada"), vec!["ca-bc", "ca-ab"]);
        assert!(h.child_ids("us-wa").is_empty());
        assert!(h.child_ids("atlantis").is_empty());
    }

    #[test]
    fn ancestors_from_parent_to_root() {
        let h = sample_hierarchy();
        assert_eq!(h.ancestor_ids("us-ca"), vec!["us", "north-america"]);
        assert!(h.ancestor_ids("europe").is_empty());
        assert!(h.ancestor_ids("atlantis").is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let roots = vec![
            LocationNode::new("us", "United States"),
            LocationNode::new("us", "United States again"),
        ];
        assert!(matches!(
            LocationHierarchy::from_roots(&roots),
            Err(HierarchyError::DuplicateId(id)) if id == "us"
        ));
    }

    #[test]
    fn from_json_round_trip() {
        let json = r#"[
            {"id": "na", "label": "North America", "children": [
                {"id": "us", "label": "United States"}
            ]}
        ]"#;
        let h = LocationHierarchy::from_json(json).unwrap();
        assert_eq!(h.len(), 2);
        assert_eq!(h.parent_id("us"), Some("na"));
    }
}
