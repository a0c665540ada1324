//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the pooled HTTP client for the trip planner.

use crate::upstream::SummaryClient;

/// Clone is required by Axum; `reqwest::Client` is internally reference-counted.
#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: SummaryClient,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: SummaryClient) -> Self {
        Self { upstream }
    }
}
