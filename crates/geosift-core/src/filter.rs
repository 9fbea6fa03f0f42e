//! Combined filter state compiled into backend requests.
//!
//! One `CatalogFilter` holds everything the user has active: free text,
//! location selection, keyword picks, property toggles, a modified-date
//! range, and a spatial shape. It owns no derived state; fragments and
//! requests are recomputed whenever an input changes, and equal filter
//! state always compiles to byte-identical output.

use chrono::NaiveDate;
use geosift_locations::{LocationFieldMapping, SelectionSet};

use crate::domain::SpatialConstraint;
use crate::search::query_builder::{
    build_date_range, build_field_filter, build_keyword_filter, build_location_filter,
    build_property_filters, build_tagged_filter, KEYWORD_FIELD,
};
use crate::search::request::{FacetOptions, SearchRequest, MATCH_ALL};

/// All active filter inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Free-text query term.
    pub text: Option<String>,
    /// Toggled location node IDs (expanded by the selection UI).
    pub locations: SelectionSet,
    /// Selected keyword facet values.
    pub keywords: Vec<String>,
    /// Active property toggle identifiers.
    pub properties: Vec<String>,
    /// Modified-date range bounds.
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Drawn or resolved spatial constraint.
    pub spatial: Option<SpatialConstraint>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any filter input is active.
    pub fn is_empty(&self) -> bool {
        self.query_term() == MATCH_ALL
            && self.locations.is_empty()
            && self.keywords.is_empty()
            && self.properties.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.spatial.is_none()
    }

    /// "Clear all": back to the empty filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn query_term(&self) -> String {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| MATCH_ALL.to_string())
    }

    /// Every active fragment in canonical order: location, keywords,
    /// properties, date range. Fragments AND together at the transport.
    pub fn fragments(&self, mapping: &LocationFieldMapping) -> Vec<String> {
        self.fragments_with(mapping, build_keyword_filter)
    }

    /// Facet-mode fragments: the keyword filter carries a tag so its own
    /// facet field can report what-if counts with that filter excluded.
    fn facet_fragments(&self, mapping: &LocationFieldMapping) -> Vec<String> {
        self.fragments_with(mapping, |keywords| {
            build_tagged_filter(KEYWORD_FIELD, keywords)
        })
    }

    fn fragments_with<F>(&self, mapping: &LocationFieldMapping, keyword_builder: F) -> Vec<String>
    where
        F: Fn(&[String]) -> Option<String>,
    {
        let mut fragments = Vec::new();
        if let Some(fragment) = build_location_filter(&self.locations, mapping) {
            fragments.push(fragment);
        }
        if let Some(fragment) = keyword_builder(&self.keywords) {
            fragments.push(fragment);
        }
        fragments.extend(build_property_filters(&self.properties));
        if let Some(fragment) = build_date_range(self.date_from, self.date_to) {
            fragments.push(fragment);
        }
        fragments
    }

    /// Assemble the search request for one page of results.
    pub fn to_search_request(
        &self,
        mapping: &LocationFieldMapping,
        start: u32,
        rows: u32,
    ) -> SearchRequest {
        SearchRequest {
            query: self.query_term(),
            filters: self.fragments(mapping),
            start,
            rows,
            spatial: self.spatial.clone(),
            ..Default::default()
        }
    }

    /// Assemble the matching facet-count request for the same filter
    /// state. Zero rows: only the counts are wanted.
    pub fn to_facet_request(&self, mapping: &LocationFieldMapping) -> SearchRequest {
        let mut facets = FacetOptions::default();
        if !self.keywords.is_empty() {
            facets
                .excluded_tags
                .push((KEYWORD_FIELD.to_string(), KEYWORD_FIELD.to_string()));
        }
        SearchRequest {
            query: self.query_term(),
            filters: self.facet_fragments(mapping),
            start: 0,
            rows: 0,
            spatial: self.spatial.clone(),
            facets: Some(facets),
            ..Default::default()
        }
    }

    /// Request resolving one record by ID.
    pub fn record_request(id: &str) -> SearchRequest {
        SearchRequest {
            query: build_field_filter("id", &[id.to_string()]).unwrap_or_else(|| MATCH_ALL.to_string()),
            rows: 1,
            ..Default::default()
        }
    }
}
