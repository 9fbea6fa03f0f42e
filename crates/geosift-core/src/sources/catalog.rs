//! Catalog backend source client.
//!
//! Issues search and facet-count requests against the field/value
//! faceted catalog API and parses its response envelope. The parse
//! functions are pure so response handling is testable without I/O.

use serde::Deserialize;
use serde_json::Value;

use super::traits::{SourceError, SourceMetadata};
use crate::domain::{CatalogRecord, FacetCategory, SearchPage};
use crate::filter::CatalogFilter;
use crate::http::{HttpClient, HttpError};
use crate::search::facets::parse_facet_fields;
use crate::search::request::{SearchRequest, Transport};

/// Catalog API response wrapper.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    response: CatalogResponseBody,
    #[serde(default)]
    facet_counts: Option<FacetCounts>,
}

#[derive(Debug, Deserialize)]
struct CatalogResponseBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    start: u32,
    docs: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct FacetCounts {
    #[serde(default)]
    facet_fields: serde_json::Map<String, Value>,
}

pub struct CatalogSource {
    client: HttpClient,
    base_url: String,
}

impl CatalogSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: HttpClient::new("geosift/1.0 (https://geosift.app)"),
            base_url: base_url.to_string(),
        }
    }

    pub fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "catalog",
            name: "Geospatial Catalog",
            description: "Field/value faceted search over the dataset catalog",
            base_url: "https://catalog.example.org/search",
            requires_api_key: false,
        }
    }

    /// Run a search request and parse one page of results.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SourceError> {
        let body = self.execute(request).await?;
        Self::parse_search_response(&body)
    }

    /// Run the facet-count variant of a request.
    pub async fn facets(&self, request: &SearchRequest) -> Result<Vec<FacetCategory>, SourceError> {
        let body = self.execute(request).await?;
        Self::parse_facet_response(&body)
    }

    /// Resolve a single record by ID.
    pub async fn fetch_by_id(&self, id: &str) -> Result<CatalogRecord, SourceError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SourceError::InvalidQuery("empty record id".to_string()));
        }
        let page = self.search(&CatalogFilter::record_request(trimmed)).await?;
        page.records.into_iter().next().ok_or(SourceError::NotFound)
    }

    async fn execute(&self, request: &SearchRequest) -> Result<String, SourceError> {
        tracing::debug!(
            start = request.start,
            rows = request.rows,
            filters = request.filters.len(),
            "catalog request"
        );
        let response = match request.plan(&self.base_url) {
            Transport::Get { url } => self.client.get(&url).await?,
            Transport::Post { url, body } => self.client.post_form(&url, body).await?,
        };

        if response.status != 200 {
            tracing::warn!(status = response.status, "catalog request failed");
            return Err(SourceError::Http(HttpError::RequestFailed {
                message: format!("Status {}", response.status),
            }));
        }

        Ok(response.body)
    }

    /// Parse a search response envelope to a result page.
    pub fn parse_search_response(json: &str) -> Result<SearchPage, SourceError> {
        let response: CatalogResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid catalog JSON: {}", e)))?;

        Ok(SearchPage {
            num_found: response.response.num_found,
            start: response.response.start,
            records: response.response.docs,
        })
    }

    /// Parse a facet response to ordered categories.
    ///
    /// A parseable response with no matching facet fields is a valid
    /// empty result, not an error.
    pub fn parse_facet_response(json: &str) -> Result<Vec<FacetCategory>, SourceError> {
        let response: CatalogResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid catalog JSON: {}", e)))?;

        Ok(response
            .facet_counts
            .map(|fc| parse_facet_fields(&fc.facet_fields))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "response": {
            "numFound": 2,
            "start": 0,
            "docs": [{
                "id": "usgs-nhd-001",
                "title": "National Hydrography Dataset",
                "organization": "USGS",
                "type": "Dataset",
                "format": "Shapefile",
                "keywords": ["rivers", "hydrography"],
                "place": ["Idaho"],
                "geometry_type": "polyline"
            }, {
                "id": "usgs-ned-002",
                "title": "National Elevation Dataset"
            }]
        },
        "facet_counts": {
            "facet_fields": {
                "format": ["Shapefile", 1, "GeoTIFF", 1],
                "keywords": ["rivers", 1]
            }
        }
    }"#;

    #[test]
    fn parse_search_response_reads_envelope() {
        let page = CatalogSource::parse_search_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(page.num_found, 2);
        assert_eq!(page.start, 0);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].id, "usgs-nhd-001");
        assert_eq!(page.records[0].keywords, vec!["rivers", "hydrography"]);
        assert!(page.records[1].format.is_none());
    }

    #[test]
    fn parse_facet_response_reads_counts() {
        let categories = CatalogSource::parse_facet_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].field, "format");
        assert_eq!(categories[0].values.len(), 2);
        assert_eq!(categories[1].field, "keywords");
    }

    #[test]
    fn missing_facet_counts_is_a_valid_empty_result() {
        let json = r#"{"response": {"numFound": 0, "start": 0, "docs": []}}"#;
        let categories = CatalogSource::parse_facet_response(json).unwrap();
        assert!(categories.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = CatalogSource::parse_search_response("not json");
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }
}
