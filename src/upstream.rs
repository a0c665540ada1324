//! HTTP client for the external trip planner.
//!
//! DESIGN
//! ======
//! The host does not interpret planner responses. It forwards the request
//! body as-is and hands back status + raw body text so the browser sees
//! exactly what the planner said, including its `{"error": ...}` replies.

use std::time::Duration;

use serde_json::Value;

use crate::config::UpstreamTimeouts;

/// Errors produced while talking to the trip planner.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The planner did not answer within the request timeout.
    #[error("upstream request timed out: {0}")]
    Timeout(String),

    /// The request could not be sent or the connection failed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The planner answered but its body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Raw planner reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SummaryClient {
    /// Build a client that posts to `{base_url}/get_summary`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: summary_endpoint(base_url) })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a summary request body to the planner.
    ///
    /// Any HTTP status counts as a reply; only transport failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the body cannot
    /// be read.
    pub async fn post_summary(&self, body: &Value) -> Result<UpstreamReply, UpstreamError> {
        let response = self.http.post(&self.endpoint).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Body(e.to_string()))?;
        Ok(UpstreamReply { status, body })
    }
}

/// Join the planner base URL with the summary path.
#[must_use]
pub fn summary_endpoint(base_url: &str) -> String {
    format!("{}/get_summary", base_url.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
