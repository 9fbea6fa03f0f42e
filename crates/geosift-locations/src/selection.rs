//! Tri-state checkbox selection derived from a flat set of toggled IDs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::hierarchy::LocationHierarchy;

/// Checkbox display status for one hierarchy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Selected,
    Unselected,
    Indeterminate,
}

/// The set of node IDs the user has explicitly toggled on.
///
/// This flat set is the single source of truth; checkbox status is always
/// derived from it on read. Iteration order is sorted, which keeps every
/// downstream query fragment byte-stable for a given logical selection.
///
/// Invariant: `toggle_branch` is the normal mutation path and always
/// expands or collapses a node's full descendant set, so an interior ID
/// present without its descendants only arises from externally restored
/// state; `state` reports such a node as `Indeterminate` (coarse,
/// ambiguous scope) rather than `Selected`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Insert a single ID. Returns true if it was not already present.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Remove a single ID. Returns true if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip a single ID. Returns true if the ID is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Toggle a node together with its full descendant set.
    ///
    /// Selecting inserts the node and every descendant; deselecting
    /// removes them all. Unknown IDs are a no-op.
    pub fn toggle_branch(&mut self, hierarchy: &LocationHierarchy, id: &str) {
        let branch = hierarchy.descendant_ids(id);
        if branch.is_empty() {
            return;
        }
        if self.ids.contains(id) {
            for node in branch {
                self.ids.remove(node);
            }
        } else {
            for node in branch {
                self.ids.insert(node.to_string());
            }
        }
    }

    /// "Clear all": drop every toggled ID.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Sorted iteration over the selected IDs.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Derive the tri-state checkbox status of a node.
    ///
    /// Leaves are `Selected` iff a member, never `Indeterminate`. An
    /// interior node is `Selected` when every direct child is a member,
    /// `Indeterminate` when some-but-not-all children are members or the
    /// node itself is directly a member, else `Unselected`.
    pub fn state(&self, hierarchy: &LocationHierarchy, id: &str) -> CheckboxState {
        let Some(node) = hierarchy.get(id) else {
            return CheckboxState::Unselected;
        };

        if node.is_leaf {
            return if self.contains(id) {
                CheckboxState::Selected
            } else {
                CheckboxState::Unselected
            };
        }

        let children = hierarchy.child_ids(id);
        let selected = children.iter().filter(|c| self.contains(c)).count();

        if selected == children.len() {
            CheckboxState::Selected
        } else if selected > 0 || self.contains(id) {
            CheckboxState::Indeterminate
        } else {
            CheckboxState::Unselected
        }
    }

    /// True iff the node has children and every direct child is a member.
    /// Membership only; a child's own indeterminate status is not
    /// consulted.
    pub fn all_children_selected(&self, hierarchy: &LocationHierarchy, id: &str) -> bool {
        let children = hierarchy.child_ids(id);
        !children.is_empty() && children.iter().all(|c| self.contains(c))
    }

    /// True iff strictly between zero and all direct children are members.
    pub fn some_children_selected(&self, hierarchy: &LocationHierarchy, id: &str) -> bool {
        let children = hierarchy.child_ids(id);
        let selected = children.iter().filter(|c| self.contains(c)).count();
        selected > 0 && selected < children.len()
    }
}
