//! Wire types for the `/get_summary` exchange.
//!
//! DESIGN
//! ======
//! The trip planner owns the summary schema. Fields it sends as either text
//! or numbers stay raw `serde_json::Value`s and are only turned into display
//! text by the card that renders them, so an unexpected shape degrades to an
//! odd-looking row instead of a failed parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body for `POST /get_summary`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripQuery {
    pub origin: String,
    pub destination: String,
}

/// A single coordinate reported by the trip planner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Trip summary returned by the planner for one origin/destination pair.
///
/// Every field is defaulted and leniently typed, so a partial or oddly
/// shaped record still renders instead of being discarded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub origin: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub destination: String,
    /// Waypoint count or list, depending on the planner version.
    #[serde(default)]
    pub waypoints: Value,
    /// Human-readable distance (e.g. `"5.2 mi"`).
    #[serde(default)]
    pub distance_travelled: Value,
    /// Human-readable duration (e.g. `"1 hour 3 mins"`).
    #[serde(default)]
    pub total_time: Value,
    /// Average speed in miles per hour.
    #[serde(default)]
    pub avg_speed: Value,
    /// Backend mode codes such as `"driving"` or `"ferry-train"`.
    #[serde(default, deserialize_with = "deserialize_modes")]
    pub modes_of_transportation: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub summary: String,
    /// Start and end coordinates, when the planner includes them. A
    /// malformed pair is dropped rather than failing the record.
    #[serde(default, deserialize_with = "deserialize_lat_lng", skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<(LatLng, LatLng)>,
}

/// Text field: `null` becomes empty, scalars are stringified.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

/// Mode list: `null` or a non-list becomes empty; a lone string is one mode.
fn deserialize_modes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let modes = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(value_to_text)
            .collect(),
        Value::String(mode) => vec![mode],
        _ => Vec::new(),
    };
    Ok(modes)
}

fn deserialize_lat_lng<'de, D>(deserializer: D) -> Result<Option<(LatLng, LatLng)>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Result of one summary request, as seen by the page.
#[derive(Clone, Debug, PartialEq)]
pub enum SummaryOutcome {
    /// The planner returned a summary.
    Summary(TripSummary),
    /// The planner answered with an `error` message.
    Rejected(String),
    /// The request never produced a usable body.
    Failed(String),
}

/// Classify a raw `/get_summary` response body.
///
/// A non-empty string `error` field wins over everything else in the body;
/// status codes are not consulted.
pub fn parse_summary_response(body: &str) -> SummaryOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return SummaryOutcome::Failed(format!("invalid response body: {e}")),
    };
    if let Some(message) = rejection_message(&value) {
        return SummaryOutcome::Rejected(message);
    }
    // serde would also accept a positional array for a struct.
    if !value.is_object() {
        return SummaryOutcome::Failed("unexpected summary shape: expected a JSON object".to_owned());
    }
    match serde_json::from_value::<TripSummary>(value) {
        Ok(summary) => SummaryOutcome::Summary(summary),
        Err(e) => SummaryOutcome::Failed(format!("unexpected summary shape: {e}")),
    }
}

fn rejection_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}
