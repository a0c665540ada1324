//! Trip form state and the reducer that drives it.
//!
//! DESIGN
//! ======
//! The page keeps a single `TripState` in one signal and routes every change
//! through [`TripState::apply`]. Responses are applied in the order they
//! arrive; there is no request identity, so two overlapping submits land in
//! history by arrival rather than by submission.

#[cfg(test)]
#[path = "trip_test.rs"]
mod trip_test;

use crate::net::types::{SummaryOutcome, TripQuery, TripSummary};

/// Form fields, banners, and result history for the trip page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripState {
    /// Origin text exactly as typed.
    pub origin: String,
    /// Destination text exactly as typed.
    pub destination: String,
    /// Error banner text; empty means no banner.
    pub error_message: String,
    /// Set when the last submit had an empty origin or destination.
    pub show_validation_warning: bool,
    /// Returned summaries, most recent first.
    pub history: Vec<TripSummary>,
}

/// Discrete inputs to the trip reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum TripEvent {
    OriginEdited(String),
    DestinationEdited(String),
    SubmitStarted,
    SummaryReceived(TripSummary),
    BackendRejected(String),
    RequestFailed(String),
}

impl From<SummaryOutcome> for TripEvent {
    fn from(outcome: SummaryOutcome) -> Self {
        match outcome {
            SummaryOutcome::Summary(summary) => Self::SummaryReceived(summary),
            SummaryOutcome::Rejected(message) => Self::BackendRejected(message),
            SummaryOutcome::Failed(detail) => Self::RequestFailed(detail),
        }
    }
}

impl TripState {
    /// Return the state that results from `event`.
    #[must_use]
    pub fn apply(mut self, event: TripEvent) -> Self {
        match event {
            TripEvent::OriginEdited(text) => self.origin = text,
            TripEvent::DestinationEdited(text) => self.destination = text,
            TripEvent::SubmitStarted => {
                // Only flags the banner; the request is still sent.
                self.show_validation_warning = self.origin.is_empty() || self.destination.is_empty();
            }
            TripEvent::SummaryReceived(summary) => {
                self.history.insert(0, summary);
                self.error_message.clear();
                self.show_validation_warning = false;
                self.clear_fields();
            }
            TripEvent::BackendRejected(message) => {
                self.error_message = message;
                self.clear_fields();
            }
            TripEvent::RequestFailed(detail) => {
                self.error_message = request_failed_banner(&detail);
            }
        }
        self
    }

    /// In-place variant of [`TripState::apply`] for use inside signal updates.
    pub fn dispatch(&mut self, event: TripEvent) {
        *self = std::mem::take(self).apply(event);
    }

    /// Build the request for the current field text, untrimmed.
    #[must_use]
    pub fn query(&self) -> TripQuery {
        TripQuery { origin: self.origin.clone(), destination: self.destination.clone() }
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    fn clear_fields(&mut self) {
        self.origin.clear();
        self.destination.clear();
    }
}

/// Banner text for a request that never produced a usable response.
///
/// Covers transport errors and unreadable bodies alike, so the wording does
/// not name a cause.
#[must_use]
pub fn request_failed_banner(detail: &str) -> String {
    format!("The trip planner's reply could not be used ({detail}).")
}
