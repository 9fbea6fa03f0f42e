//! Gazetteer source: resolves place names to bounding geometries.
//!
//! Optional enrichment for the spatial fallback path; filter building
//! never depends on a gazetteer answer.

use serde::Deserialize;

use super::traits::{SourceError, SourceMetadata};
use crate::domain::BoundingBox;
use crate::http::{HttpClient, HttpError};

/// Gazetteer API response wrapper.
#[derive(Debug, Deserialize)]
struct GazetteerResponse {
    #[serde(default)]
    places: Vec<GazetteerDocument>,
}

#[derive(Debug, Deserialize)]
struct GazetteerDocument {
    name: String,
    /// `[west, south, east, north]`
    bbox: Option<Vec<f64>>,
}

/// A resolved place with its bounding geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerPlace {
    pub name: String,
    pub bbox: BoundingBox,
}

pub struct GazetteerSource {
    client: HttpClient,
    base_url: String,
}

impl GazetteerSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: HttpClient::new("geosift/1.0 (https://geosift.app)"),
            base_url: base_url.to_string(),
        }
    }

    pub fn metadata() -> SourceMetadata {
        SourceMetadata {
            id: "gazetteer",
            name: "Gazetteer",
            description: "Resolves free-text place names to geometries",
            base_url: "https://gazetteer.example.org/lookup",
            requires_api_key: false,
        }
    }

    /// Look up a place name. A blank name resolves to no places without
    /// touching the network.
    pub async fn lookup(&self, place: &str) -> Result<Vec<GazetteerPlace>, SourceError> {
        let trimmed = place.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}?q={}", self.base_url, urlencoding::encode(trimmed));
        let response = self.client.get(&url).await?;

        if response.status != 200 {
            tracing::warn!(status = response.status, "gazetteer lookup failed");
            return Err(SourceError::Http(HttpError::RequestFailed {
                message: format!("Status {}", response.status),
            }));
        }

        Self::parse_lookup_response(&response.body)
    }

    /// Parse a lookup response. Documents without a usable four-number
    /// bounding box are skipped.
    pub fn parse_lookup_response(json: &str) -> Result<Vec<GazetteerPlace>, SourceError> {
        let response: GazetteerResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid gazetteer JSON: {}", e)))?;

        Ok(response
            .places
            .into_iter()
            .filter_map(|doc| {
                let bbox = doc.bbox?;
                if bbox.len() != 4 || bbox.iter().any(|v| !v.is_finite()) {
                    return None;
                }
                Some(GazetteerPlace {
                    name: doc.name,
                    bbox: BoundingBox::new(bbox[0], bbox[1], bbox[2], bbox[3]),
                })
            })
            .collect())
    }
}
