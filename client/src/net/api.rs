//! HTTP helper for the trip planner endpoint.
//!
//! Client-side (hydrate): real request via `gloo-net`.
//! Server-side (SSR): returns a failed outcome, since the form only submits
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is folded into [`SummaryOutcome`] so the page applies
//! one event per request and never has to handle a panic or a dangling
//! future.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SummaryOutcome, TripQuery};

/// Path of the summary endpoint, relative to the page origin.
pub const SUMMARY_ENDPOINT: &str = "/get_summary";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(detail: &str) -> String {
    format!("summary request failed: {detail}")
}

/// Post `query` to [`SUMMARY_ENDPOINT`] and classify the response.
pub async fn fetch_summary(query: &TripQuery) -> SummaryOutcome {
    #[cfg(feature = "hydrate")]
    {
        match post_summary(query).await {
            Ok(body) => super::types::parse_summary_response(&body),
            Err(e) => SummaryOutcome::Failed(request_failed_message(&e)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        SummaryOutcome::Failed("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn post_summary(query: &TripQuery) -> Result<String, String> {
    // `json` sets `Content-Type: application/json`.
    let resp = gloo_net::http::Request::post(SUMMARY_ENDPOINT)
        .json(query)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.text().await.map_err(|e| e.to_string())
}
