//! `POST /get_summary` forwarding to the trip planner.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::state::AppState;
use crate::upstream::{UpstreamError, UpstreamReply};

/// Message shown to the browser when the planner cannot be reached.
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "The trip planner is unavailable right now. Please try again shortly.";

/// `POST /get_summary` — relay the JSON body to the planner and its reply back.
pub async fn get_summary(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    match state.upstream.post_summary(&body).await {
        Ok(reply) => {
            tracing::debug!(status = reply.status, "summary forwarded");
            relay_reply(reply)
        }
        Err(e) => {
            tracing::warn!(error = %e, endpoint = state.upstream.endpoint(), "summary upstream failed");
            let status = upstream_error_to_status(&e);
            (status, Json(json!({ "error": UPSTREAM_UNAVAILABLE_MESSAGE }))).into_response()
        }
    }
}

fn relay_reply(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}

pub(crate) fn upstream_error_to_status(err: &UpstreamError) -> StatusCode {
    match err {
        UpstreamError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        UpstreamError::Request(_) | UpstreamError::Body(_) => StatusCode::BAD_GATEWAY,
        UpstreamError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
