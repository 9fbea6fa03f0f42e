//! Facet count parsing into display-ready categories.

use serde_json::{Map, Value};

use crate::domain::{FacetCategory, FacetValue};

/// Canonical facet display order. Categories always come back in this
/// order, regardless of payload key order; fields outside this list are
/// not surfaced.
pub const FACET_FIELD_PRIORITY: &[&str] =
    &["type", "format", "keywords", "place", "organization"];

/// Display labels for facet fields.
const FIELD_LABELS: &[(&str, &str)] = &[
    ("type", "Data Type"),
    ("format", "Format"),
    ("keywords", "Keywords"),
    ("place", "Place"),
    ("organization", "Organization"),
];

/// Display label for a facet field, falling back to the raw field name.
pub fn facet_display_label(field: &str) -> &str {
    FIELD_LABELS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, label)| *label)
        .unwrap_or(field)
}

/// Convert the backend's `facet_fields` object into ordered categories.
///
/// Each raw field value is a flat alternating `[name, count, ...]`
/// array; a trailing name with no paired count is dropped. Fields absent
/// from the payload, or present with no complete pair, are skipped.
pub fn parse_facet_fields(fields: &Map<String, Value>) -> Vec<FacetCategory> {
    FACET_FIELD_PRIORITY
        .iter()
        .filter_map(|field| {
            let raw = fields.get(*field)?.as_array()?;
            let values = parse_value_pairs(raw);
            if values.is_empty() {
                return None;
            }
            Some(FacetCategory {
                field: (*field).to_string(),
                display_name: facet_display_label(field).to_string(),
                values,
            })
        })
        .collect()
}

fn parse_value_pairs(raw: &[Value]) -> Vec<FacetValue> {
    raw.chunks_exact(2)
        .filter_map(|pair| {
            let name = pair[0].as_str()?;
            let count = pair[1].as_u64()?;
            Some(FacetValue {
                name: name.to_string(),
                count,
            })
        })
        .collect()
}
