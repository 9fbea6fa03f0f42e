//! Search request assembly and transport negotiation.

use crate::domain::SpatialConstraint;

use super::facets::FACET_FIELD_PRIORITY;

/// Match-all sentinel used when no free-text term is active.
pub const MATCH_ALL: &str = "*:*";

/// Default sort expression: relevance, descending.
pub const DEFAULT_SORT: &str = "score desc";

/// Default page size.
pub const DEFAULT_ROWS: u32 = 20;

/// Longest serialized URL issued as GET; anything longer switches to a
/// POST carrying the identical parameters in its body.
pub const MAX_GET_URL_LEN: usize = 2000;

/// The fixed, fully-enumerated result field list every request asks for.
pub const RESULT_FIELDS: &[&str] = &[
    "id",
    "title",
    "description",
    "organization",
    "type",
    "format",
    "keywords",
    "place",
    "modified",
    "geometry_type",
    "download_url",
    "license",
    "service_protocol",
];

/// Facet computation options attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    /// Fields to facet on, in canonical priority order.
    pub fields: Vec<String>,
    /// Minimum count for a value to be returned.
    pub min_count: u32,
    /// Per-field cap on returned values.
    pub limit: u32,
    /// Fields whose values sort alphabetically instead of by count.
    pub alpha_sort_fields: Vec<String>,
    /// `(field, tag)` pairs: the facet for `field` is computed with the
    /// filter carrying `tag` excluded, for what-if counts.
    pub excluded_tags: Vec<(String, String)>,
}

impl Default for FacetOptions {
    fn default() -> Self {
        Self {
            fields: FACET_FIELD_PRIORITY
                .iter()
                .map(|f| (*f).to_string())
                .collect(),
            min_count: 1,
            limit: 100,
            alpha_sort_fields: vec!["place".to_string()],
            excluded_tags: Vec::new(),
        }
    }
}

/// One fully-specified backend request.
///
/// Equal logical filter state always serializes to byte-identical
/// parameters, so the parameter set doubles as a cache/deduplication key
/// and survives URL round-trips.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Free-text query term; `*:*` when none is active.
    pub query: String,
    /// Filter fragments, each an independent `fq` parameter (implicit
    /// AND).
    pub filters: Vec<String>,
    pub start: u32,
    pub rows: u32,
    pub sort: String,
    pub spatial: Option<SpatialConstraint>,
    pub facets: Option<FacetOptions>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: MATCH_ALL.to_string(),
            filters: Vec::new(),
            start: 0,
            rows: DEFAULT_ROWS,
            sort: DEFAULT_SORT.to_string(),
            spatial: None,
            facets: None,
        }
    }
}

/// How a request goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Get { url: String },
    Post { url: String, body: String },
}

impl SearchRequest {
    /// Parameter list in canonical order.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("q".to_string(), self.query.clone())];
        for fragment in &self.filters {
            params.push(("fq".to_string(), fragment.clone()));
        }
        params.push(("fl".to_string(), RESULT_FIELDS.join(",")));
        params.push(("start".to_string(), self.start.to_string()));
        params.push(("rows".to_string(), self.rows.to_string()));
        params.push(("sort".to_string(), self.sort.clone()));

        if let Some(spatial) = &self.spatial {
            params.push(("place".to_string(), spatial.query_value()));
            params.push(("op".to_string(), "within".to_string()));
        }

        if let Some(facets) = &self.facets {
            params.push(("facet".to_string(), "true".to_string()));
            params.push(("facet.mincount".to_string(), facets.min_count.to_string()));
            params.push(("facet.limit".to_string(), facets.limit.to_string()));
            for field in &facets.fields {
                let key = facets
                    .excluded_tags
                    .iter()
                    .find(|(f, _)| f == field)
                    .map(|(_, tag)| format!("{{!ex={}}}{}", tag, field))
                    .unwrap_or_else(|| field.clone());
                params.push(("facet.field".to_string(), key));
            }
            for field in &facets.alpha_sort_fields {
                params.push((format!("f.{}.facet.sort", field), "index".to_string()));
            }
        }

        params
    }

    /// Percent-encoded `k=v&k=v` form of `params()`, shared by the GET
    /// query string and the POST body.
    pub fn encoded_params(&self) -> String {
        self.params()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full GET URL against a base endpoint.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}?{}", base_url, self.encoded_params())
    }

    /// Negotiate the wire form: GET by default, POST with an equivalent
    /// body when the URL would exceed `MAX_GET_URL_LEN`. The parameter
    /// names and values are identical either way.
    pub fn plan(&self, base_url: &str) -> Transport {
        let url = self.url(base_url);
        if url.len() > MAX_GET_URL_LEN {
            Transport::Post {
                url: base_url.to_string(),
                body: self.encoded_params(),
            }
        } else {
            Transport::Get { url }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundingBox, SpatialConstraint};

    #[test]
    fn default_request_params() {
        let request = SearchRequest::default();
        let params = request.params();
        assert_eq!(params[0], ("q".to_string(), "*:*".to_string()));
        assert!(params.iter().any(|(k, v)| k == "fl" && v.contains("geometry_type")));
        assert!(params.iter().any(|(k, v)| k == "sort" && v == "score desc"));
        assert!(!params.iter().any(|(k, _)| k == "facet"));
    }

    #[test]
    fn filters_become_repeated_fq_params() {
        let request = SearchRequest {
            filters: vec![
                "(country:(\"United States\"))".to_string(),
                "geometry_type:*".to_string(),
            ],
            ..Default::default()
        };
        let params = request.params();
        let fq: Vec<&str> = params
            .iter()
            .filter(|(k, _)| k == "fq")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(
            fq,
            vec!["(country:(\"United States\"))", "geometry_type:*"]
        );
    }

    #[test]
    fn spatial_pair_is_emitted() {
        let request = SearchRequest {
            spatial: Some(SpatialConstraint::Box(BoundingBox::new(
                -117.2, 42.0, -111.0, 49.0,
            ))),
            ..Default::default()
        };
        let params = request.params();
        assert!(params
            .iter()
            .any(|(k, v)| k == "place" && v == "-117.2,42,-111,49"));
        assert!(params.iter().any(|(k, v)| k == "op" && v == "within"));
    }

    #[test]
    fn facet_params_include_exclusions_and_sort_overrides() {
        let request = SearchRequest {
            rows: 0,
            facets: Some(FacetOptions {
                excluded_tags: vec![("keywords".to_string(), "keywords".to_string())],
                ..Default::default()
            }),
            ..Default::default()
        };
        let params = request.params();
        assert!(params.iter().any(|(k, v)| k == "facet" && v == "true"));
        assert!(params
            .iter()
            .any(|(k, v)| k == "facet.field" && v == "{!ex=keywords}keywords"));
        assert!(params.iter().any(|(k, v)| k == "facet.field" && v == "format"));
        assert!(params
            .iter()
            .any(|(k, v)| k == "f.place.facet.sort" && v == "index"));
    }

    #[test]
    fn short_requests_go_as_get() {
        let request = SearchRequest::default();
        match request.plan("https://catalog.example.org/search") {
            Transport::Get { url } => {
                assert!(url.starts_with("https://catalog.example.org/search?q=%2A%3A%2A"))
            }
            Transport::Post { .. } => panic!("expected GET"),
        }
    }

    #[test]
    fn oversized_requests_switch_to_post() {
        let request = SearchRequest {
            filters: vec![format!("keywords:(\"{}\")", "x".repeat(2100))],
            ..Default::default()
        };
        match request.plan("https://catalog.example.org/search") {
            Transport::Post { url, body } => {
                assert_eq!(url, "https://catalog.example.org/search");
                assert_eq!(body, request.encoded_params());
            }
            Transport::Get { .. } => panic!("expected POST"),
        }
    }

    #[test]
    fn params_are_deterministic() {
        let request = SearchRequest {
            filters: vec!["(country:(\"United States\"))".to_string()],
            facets: Some(FacetOptions::default()),
            ..Default::default()
        };
        assert_eq!(request.encoded_params(), request.clone().encoded_params());
        assert_eq!(request.url("http://c"), request.url("http://c"));
    }
}
