//! geosift-core: filter compilation and catalog search core for geosift
//!
//! This library provides pure Rust implementations of:
//! - Filter fragment building (location, keyword, property, date range)
//! - Search and facet request assembly with GET/POST transport
//!   negotiation
//! - Facet count parsing into display-ready categories
//! - Catalog and gazetteer source clients
//!
//! Everything outside `http` and `sources` is synchronous, pure, and
//! free of I/O; equal logical filter state always compiles to
//! byte-identical request parameters.

pub mod domain;
pub mod filter;
#[cfg(feature = "native")]
pub mod http;
pub mod search;
#[cfg(feature = "native")]
pub mod sources;

// Re-export main types for convenience
pub use domain::{
    BoundingBox, CatalogRecord, FacetCategory, FacetValue, SearchPage, SpatialConstraint,
};
pub use filter::CatalogFilter;
pub use search::escape::escape_query_value;
pub use search::facets::{facet_display_label, parse_facet_fields, FACET_FIELD_PRIORITY};
pub use search::pagination::PageCursor;
pub use search::query_builder::{
    build_date_range, build_date_range_for_field, build_field_filter, build_keyword_filter,
    build_location_filter, build_property_filters, build_tagged_filter, DATE_FIELD, KEYWORD_FIELD,
};
pub use search::request::{
    FacetOptions, SearchRequest, Transport, DEFAULT_ROWS, DEFAULT_SORT, MATCH_ALL,
    MAX_GET_URL_LEN, RESULT_FIELDS,
};
pub use search::session::RequestSession;
#[cfg(feature = "native")]
pub use http::{HttpError, HttpResponse};
#[cfg(feature = "native")]
pub use sources::{CatalogSource, GazetteerPlace, GazetteerSource, SourceError, SourceMetadata};
