//! Native HTTP client using reqwest.

use std::time::Duration;

use reqwest::Client;

use super::{HttpError, HttpResponse};

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }

    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        Self::read_response(response).await
    }

    /// POST a form-encoded body. Used when a request's parameter set is
    /// too long to travel as a URL.
    pub async fn post_form(&self, url: &str, body: String) -> Result<HttpResponse, HttpError> {
        tracing::debug!(url, body_len = body.len(), "POST");
        let response = self
            .client
            .post(url)
            .header("User-Agent", &self.user_agent)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        Self::read_response(response).await
    }

    async fn read_response(response: reqwest::Response) -> Result<HttpResponse, HttpError> {
        let status = response.status().as_u16();

        if status == 429 {
            return Err(HttpError::RateLimited);
        }

        let body = response.text().await.map_err(|e| HttpError::ParseError {
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new("geosift/1.0")
    }
}
