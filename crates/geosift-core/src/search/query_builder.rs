//! Filter fragment builders.
//!
//! Pure functions turning typed filter inputs into backend query
//! fragments. Fragments combine with implicit AND across fragments and
//! explicit OR inside one fragment. All builders are total: malformed or
//! absent input degrades to "no fragment", never an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use geosift_locations::{LocationFieldMapping, SelectionSet};

use super::escape::quoted;

/// Backend field for keyword containment filters.
pub const KEYWORD_FIELD: &str = "keywords";

/// Backend field for date range filters.
pub const DATE_FIELD: &str = "modified";

/// Static table mapping property identifiers to backend predicates.
///
/// Bare existence checks stay unparenthesized; predicates carrying an
/// internal OR bring their own parentheses.
const PROPERTY_PREDICATES: &[(&str, &str)] = &[
    ("has_spatial", "geometry_type:*"),
    ("has_downloads", "download_url:*"),
    (
        "web_services",
        "(service_protocol:(\"OGC:WMS\" OR \"OGC:WFS\" OR \"OGC:WCS\"))",
    ),
    (
        "open_license",
        "(license:(\"CC-BY\" OR \"CC0\" OR \"Public Domain\"))",
    ),
];

/// `field:("v1" OR "v2")` containment clause; None when no usable values.
fn values_clause<'a, I>(field: &str, values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let quoted_values: Vec<String> = values
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(quoted)
        .collect();
    if quoted_values.is_empty() {
        return None;
    }
    Some(format!("{}:({})", field, quoted_values.join(" OR ")))
}

/// Build the single location fragment from the current selection.
///
/// Selected IDs are grouped by mapped backend field; each field becomes
/// one containment clause, and the per-field clauses are ORed inside one
/// parenthesized fragment. Selections spanning hierarchy levels (a
/// region and one of its states) mean "match any", never an
/// intersection. IDs without a mapping entry are dropped.
pub fn build_location_filter(
    selection: &SelectionSet,
    mapping: &LocationFieldMapping,
) -> Option<String> {
    let mut by_field: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for id in selection.iter() {
        if let Some(entry) = mapping.get(id) {
            let values = by_field.entry(entry.field.as_str()).or_default();
            if !values.contains(&entry.value.as_str()) {
                values.push(entry.value.as_str());
            }
        }
    }

    let clauses: Vec<String> = by_field
        .iter()
        .filter_map(|(field, values)| values_clause(field, values.iter().copied()))
        .collect();
    if clauses.is_empty() {
        return None;
    }
    Some(format!("({})", clauses.join(" OR ")))
}

/// `field:("v1" OR "v2")` for an arbitrary field; None when empty.
pub fn build_field_filter(field: &str, values: &[String]) -> Option<String> {
    values_clause(field, values.iter().map(String::as_str))
}

/// Keyword containment filter over the `keywords` field.
pub fn build_keyword_filter(keywords: &[String]) -> Option<String> {
    build_field_filter(KEYWORD_FIELD, keywords)
}

/// Tagged variant, `{!tag=field}field:(...)`, for a field that is
/// filtered and faceted at once; the tag lets the backend compute
/// what-if counts with this one filter excluded.
pub fn build_tagged_filter(field: &str, values: &[String]) -> Option<String> {
    build_field_filter(field, values).map(|clause| format!("{{!tag={}}}{}", field, clause))
}

/// Fragments for known property toggles. Unknown identifiers are
/// silently dropped.
pub fn build_property_filters(property_ids: &[String]) -> Vec<String> {
    property_ids
        .iter()
        .filter_map(|id| {
            PROPERTY_PREDICATES
                .iter()
                .find(|(known, _)| known == id)
                .map(|(_, predicate)| (*predicate).to_string())
        })
        .collect()
}

/// Date range filter over the `modified` field.
pub fn build_date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<String> {
    build_date_range_for_field(DATE_FIELD, from, to)
}

/// `field:[from TO to]` with `*` for an absent bound.
///
/// The lower bound widens to the first millisecond of its day, the upper
/// bound to the last, both in UTC. None when both bounds are absent.
pub fn build_date_range_for_field(
    field: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Option<String> {
    if from.is_none() && to.is_none() {
        return None;
    }
    let lower = from
        .map(|d| format!("{}T00:00:00.000Z", d.format("%Y-%m-%d")))
        .unwrap_or_else(|| "*".to_string());
    let upper = to
        .map(|d| format!("{}T23:59:59.999Z", d.format("%Y-%m-%d")))
        .unwrap_or_else(|| "*".to_string());
    Some(format!("{}:[{} TO {}]", field, lower, upper))
}
