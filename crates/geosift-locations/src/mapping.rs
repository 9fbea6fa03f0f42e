//! Node ID to backend field/value mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Backend field name and the literal value matched for one location node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub field: String,
    pub value: String,
}

/// Static map from node ID to its backend field/value pair.
///
/// Both interior and leaf nodes may carry entries, mapping to
/// progressively broader or narrower backend fields (a region to
/// `region`, a country to `country`, a state to `state`). A node without
/// an entry is silently omitted from location filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationFieldMapping {
    entries: HashMap<String, FieldMapping>,
}

impl LocationFieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, field: &str, value: &str) {
        self.entries.insert(
            id.to_string(),
            FieldMapping {
                field: field.to_string(),
                value: value.to_string(),
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&FieldMapping> {
        self.entries.get(id)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
