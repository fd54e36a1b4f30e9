//! Client for the New York Times Books reviews endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub url: Option<String>,
    pub publication_dt: Option<String>,
    pub byline: Option<String>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub isbn13: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub num_results: u32,
    #[serde(default)]
    pub results: Vec<Review>,
}

#[derive(Clone)]
pub struct ReviewClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ReviewClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up reviews by book title.
    ///
    /// No timeout and no retry: the call waits for the upstream to answer or fail.
    pub async fn fetch_reviews(&self, title: &str) -> Result<ReviewsResponse, DomainError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("title", title), ("api-key", self.api_key.as_str())])
            .send()
            .await
            // the URL carries the API key
            .map_err(|e| DomainError::External(format!("Failed to send request: {}", e.without_url())))?;

        if !resp.status().is_success() {
            return Err(DomainError::External(format!(
                "Review API returned status: {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::External(format!("Failed to read response body: {}", e.without_url())))?;

        let parsed: ReviewsResponse = serde_json::from_str(&body)
            .map_err(|e| DomainError::External(format!("Failed to parse JSON: {}", e)))?;

        tracing::debug!(
            "Review API status={:?} num_results={} for {:?}",
            parsed.status,
            parsed.num_results,
            title
        );

        Ok(parsed)
    }
}
