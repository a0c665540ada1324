//! Card rendering one trip summary.
//!
//! DESIGN
//! ======
//! The card is a pure projection of a [`TripSummary`]. All text shaping
//! (loose JSON values, the speed suffix, mode labels) lives in small free
//! functions so it can be checked without a renderer.

#[cfg(test)]
#[path = "result_card_test.rs"]
mod result_card_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::types::{LatLng, TripSummary};

/// Display-ready text for one card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFields {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub waypoints: String,
    pub speed: String,
    pub total_time: String,
    pub coordinates: Option<String>,
    pub summary: String,
    pub modes: Vec<String>,
}

impl From<TripSummary> for CardFields {
    fn from(summary: TripSummary) -> Self {
        Self {
            distance: display_value(&summary.distance_travelled),
            waypoints: display_value(&summary.waypoints),
            speed: format_speed(&summary.avg_speed),
            total_time: display_value(&summary.total_time),
            coordinates: summary.lat_lng.map(|(start, end)| format_coordinates(start, end)),
            modes: relabel_modes(&summary.modes_of_transportation),
            origin: summary.origin,
            destination: summary.destination,
            summary: summary.summary,
        }
    }
}

/// Display block for one summary.
#[component]
pub fn ResultCard(summary: TripSummary) -> impl IntoView {
    let CardFields { origin, destination, distance, waypoints, speed, total_time, coordinates, summary, modes } =
        CardFields::from(summary);

    view! {
        <div class="result-card">
            <div class="result-card__header">
                <span class="result-card__pair">
                    <strong>"Origin:"</strong>
                    <span class="result-card__value">{origin}</span>
                </span>
                <span class="result-card__pair">
                    <strong>"Destination:"</strong>
                    <span class="result-card__value">{destination}</span>
                </span>
            </div>
            <div class="result-card__body">
                <div class="result-card__row">
                    <strong>"Total Distance:"</strong>
                    <span class="result-card__value">{distance}</span>
                </div>
                <div class="result-card__row">
                    <strong>"Waypoints:"</strong>
                    <span class="result-card__value">{waypoints}</span>
                </div>
                <div class="result-card__row">
                    <strong>"Average Speed:"</strong>
                    <span class="result-card__value">{speed}</span>
                </div>
                <div class="result-card__row">
                    <strong>"Total Time:"</strong>
                    <span class="result-card__value">{total_time}</span>
                </div>
                {coordinates
                    .map(|text| {
                        view! {
                            <div class="result-card__row">
                                <strong>"Start / End (Lat, Lng):"</strong>
                                <span class="result-card__value">{text}</span>
                            </div>
                        }
                    })}
                <h3 class="result-card__heading">"Summary"</h3>
                <p class="result-card__summary">{summary}</p>
                <h3 class="result-card__heading">"Final Recommendation"</h3>
                <div class="result-card__recommendation">
                    <p>
                        "Based on this information, we would not recommend a Unicycle for this journey, and instead suggest you use the following -"
                    </p>
                    <div class="result-card__row">
                        <strong>"Alternate modes:"</strong>
                        <ul class="result-card__modes">
                            {modes.into_iter().map(|mode| view! { <li>{mode}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Display label for a backend mode code.
///
/// Each pattern replaces its first occurrence, in order. `"ferry-train"` is
/// handled before `"ferry"` so it does not become `"Ferry-train"`.
#[must_use]
pub fn relabel_mode(code: &str) -> String {
    code.replacen("driving", "Car", 1)
        .replacen("ferry-train", "Auto Train", 1)
        .replacen("ferry", "Ferry", 1)
}

/// Relabel every mode code, keeping positions.
#[must_use]
pub fn relabel_modes(codes: &[String]) -> Vec<String> {
    codes.iter().map(|code| relabel_mode(code)).collect()
}

/// Render a loosely typed summary field as text. Missing values are empty.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Average speed with its unit suffix.
#[must_use]
pub fn format_speed(value: &Value) -> String {
    format!("{} mph", display_value(value))
}

fn format_coordinates(start: LatLng, end: LatLng) -> String {
    format!("({}, {}) to ({}, {})", start.lat, start.lng, end.lat, end.lng)
}
