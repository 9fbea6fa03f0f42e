//! Common types for backend source clients.

use thiserror::Error;

use crate::http::HttpError;

/// Errors surfaced by source clients.
///
/// Transport failures stay typed so the UI can tell a failed request
/// apart from a legitimately empty result and offer a retry.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Http(HttpError),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Rate limited")]
    RateLimit,
    #[error("Not found")]
    NotFound,
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl From<HttpError> for SourceError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::RateLimited => SourceError::RateLimit,
            other => SourceError::Http(other),
        }
    }
}

/// Metadata about a backend source.
pub struct SourceMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub requires_api_key: bool,
}
