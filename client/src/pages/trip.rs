//! Trip summary page: the form, its banners, and the result history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the `TripState` signal, turns form
//! callbacks into reducer events, and runs the summary request as a local
//! task whose outcome is applied when it arrives.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::input_form::InputForm;
use crate::components::result_card::ResultCard;
use crate::net::types::TripSummary;
use crate::state::trip::{TripEvent, TripState};

#[cfg(test)]
#[path = "trip_test.rs"]
mod trip_test;

const ERROR_SUFFIX: &str = " We definitely don't recommend riding a Unicycle.";
const WARNING_TEXT: &str =
    "Please make sure to enter your origin and destination. We definitely don't recommend riding a Unicycle.";

/// Root view of the application.
#[component]
pub fn TripPage() -> impl IntoView {
    let trip = RwSignal::new(TripState::default());

    // Responses that land after the page is gone are dropped.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_origin_input = Callback::new(move |text: String| {
        trip.update(|s| s.dispatch(TripEvent::OriginEdited(text)));
    });
    let on_destination_input = Callback::new(move |text: String| {
        trip.update(|s| s.dispatch(TripEvent::DestinationEdited(text)));
    });

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = trip.with_untracked(TripState::query);
        trip.update(|s| s.dispatch(TripEvent::SubmitStarted));

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                log::debug!("requesting summary: {} -> {}", query.origin, query.destination);
                let outcome = crate::net::api::fetch_summary(&query).await;
                if !alive.load(Ordering::Relaxed) {
                    log::debug!("summary arrived after teardown; dropped");
                    return;
                }
                if let crate::net::types::SummaryOutcome::Failed(detail) = &outcome {
                    log::warn!("summary request failed: {detail}");
                }
                trip.update(|s| s.dispatch(outcome.into()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, &alive);
        }
    });

    let origin = Signal::derive(move || trip.with(|s| s.origin.clone()));
    let destination = Signal::derive(move || trip.with(|s| s.destination.clone()));

    view! {
        <div class="trip-page">
            <main class="trip-page__main">
                <Show when=move || trip.with(TripState::has_error)>
                    <div class="alert alert--danger" role="alert">
                        <strong>"Error: "</strong>
                        {move || trip.with(|s| s.error_message.clone())}
                        {ERROR_SUFFIX}
                    </div>
                </Show>
                <Show when=move || trip.with(|s| s.show_validation_warning)>
                    <div class="alert alert--warning" role="alert">
                        <strong>"Warning: "</strong>
                        {WARNING_TEXT}
                    </div>
                </Show>
                <InputForm
                    origin=origin
                    destination=destination
                    on_origin_input=on_origin_input
                    on_destination_input=on_destination_input
                    on_submit=on_submit
                />
                <div class="trip-page__results">
                    {move || trip.with(|s| history_view(&s.history))}
                </div>
            </main>
        </div>
    }
}

/// One card per history entry, in stored order (most recent first).
pub fn history_view(history: &[TripSummary]) -> impl IntoView + use<> {
    history
        .iter()
        .cloned()
        .map(|summary| view! { <ResultCard summary=summary/> })
        .collect_view()
}
