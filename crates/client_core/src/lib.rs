use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{ErrorBody, RecommendRequest, RecommendResponse, RECOMMEND_FALLBACK_ERROR};
use thiserror::Error;
use tracing::debug;

mod form;
pub use form::{FormPhase, RecommendForm};

#[derive(Debug, Error)]
pub enum RecommendError {
    /// The endpoint answered with a non-2xx status. `message` is the
    /// server-supplied `detail` when present, else the fixed fallback text.
    #[error("{message}")]
    Rejected { message: String },
    /// The request never produced a usable response: connection failure or
    /// a body that does not parse.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl RecommendError {
    /// User-facing text for the error panel.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Seam between the form state machine and the network, so submission
/// behavior is testable against stub backends.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, query: &str) -> Result<RecommendResponse, RecommendError>;
}

/// HTTP client for the travel course recommendation endpoint.
#[derive(Clone)]
pub struct RecommendClient {
    http: Client,
    endpoint: String,
}

impl RecommendClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Recommender for RecommendClient {
    async fn recommend(&self, query: &str) -> Result<RecommendResponse, RecommendError> {
        debug!(endpoint = %self.endpoint, "requesting course recommendation");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&RecommendRequest {
                query: query.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let body: ErrorBody = response.json().await?;
            let message = body
                .detail
                .unwrap_or_else(|| RECOMMEND_FALLBACK_ERROR.to_string());
            return Err(RecommendError::Rejected { message });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
