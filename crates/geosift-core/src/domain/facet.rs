//! Display-ready facet categories parsed from backend counts.

use serde::{Deserialize, Serialize};

/// One facet value with its document count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub name: String,
    pub count: u64,
}

/// One facet category, ready for the filter UI.
///
/// Categories come back ordered by the canonical field priority, values
/// in the order the backend returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCategory {
    pub field: String,
    pub display_name: String,
    pub values: Vec<FacetValue>,
}
