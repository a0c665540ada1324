use super::*;
use serde_json::json;

// =============================================================
// relabel_mode
// =============================================================

#[test]
fn relabel_known_codes() {
    assert_eq!(relabel_mode("driving"), "Car");
    assert_eq!(relabel_mode("ferry"), "Ferry");
    assert_eq!(relabel_mode("ferry-train"), "Auto Train");
}

#[test]
fn relabel_unknown_code_passes_through() {
    assert_eq!(relabel_mode("walking"), "walking");
    assert_eq!(relabel_mode("transit"), "transit");
    assert_eq!(relabel_mode(""), "");
}

#[test]
fn relabel_is_stable_on_display_labels() {
    for code in ["driving", "ferry", "ferry-train", "walking"] {
        let once = relabel_mode(code);
        assert_eq!(relabel_mode(&once), once);
    }
}

#[test]
fn relabel_modes_keeps_positions() {
    let codes = vec!["driving".to_owned(), "ferry".to_owned(), "ferry-train".to_owned()];
    assert_eq!(relabel_modes(&codes), vec!["Car", "Ferry", "Auto Train"]);

    let reversed = vec!["ferry-train".to_owned(), "walking".to_owned(), "driving".to_owned()];
    assert_eq!(relabel_modes(&reversed), vec!["Auto Train", "walking", "Car"]);
}

#[test]
fn relabel_modes_does_not_dedup() {
    let codes = vec!["driving".to_owned(), "driving".to_owned()];
    assert_eq!(relabel_modes(&codes), vec!["Car", "Car"]);
}

// =============================================================
// display_value / format_speed
// =============================================================

#[test]
fn display_value_renders_text_and_numbers() {
    assert_eq!(display_value(&json!("5.2 mi")), "5.2 mi");
    assert_eq!(display_value(&json!(12)), "12");
    assert_eq!(display_value(&json!(52.3)), "52.3");
}

#[test]
fn display_value_missing_is_empty() {
    assert_eq!(display_value(&Value::Null), "");
}

#[test]
fn display_value_joins_lists() {
    assert_eq!(display_value(&json!(["Leeds", "York", 3])), "Leeds, York, 3");
    assert_eq!(display_value(&json!([])), "");
}

#[test]
fn format_speed_appends_unit() {
    assert_eq!(format_speed(&json!(5)), "5 mph");
    assert_eq!(format_speed(&json!(47.8)), "47.8 mph");
    assert_eq!(format_speed(&Value::Null), " mph");
}

#[test]
fn format_coordinates_lists_start_then_end() {
    let start = LatLng { lat: 51.5, lng: -0.12 };
    let end = LatLng { lat: 53.8, lng: -1.55 };
    assert_eq!(format_coordinates(start, end), "(51.5, -0.12) to (53.8, -1.55)");
}

// =============================================================
// CardFields
// =============================================================

fn full_summary() -> TripSummary {
    TripSummary {
        origin: "London".to_owned(),
        destination: "Paris".to_owned(),
        waypoints: json!(14),
        distance_travelled: json!("195.3 mi"),
        total_time: json!("3 hours 31 mins"),
        avg_speed: json!(55.8),
        modes_of_transportation: vec!["driving".to_owned(), "ferry-train".to_owned()],
        summary: "This journey will take 3 hours 31 mins".to_owned(),
        lat_lng: Some((LatLng { lat: 51.5, lng: -0.12 }, LatLng { lat: 48.85, lng: 2.35 })),
    }
}

#[test]
fn card_fields_project_every_row() {
    let fields = CardFields::from(full_summary());
    assert_eq!(fields.origin, "London");
    assert_eq!(fields.destination, "Paris");
    assert_eq!(fields.distance, "195.3 mi");
    assert_eq!(fields.waypoints, "14");
    assert_eq!(fields.speed, "55.8 mph");
    assert_eq!(fields.total_time, "3 hours 31 mins");
    assert_eq!(fields.coordinates.as_deref(), Some("(51.5, -0.12) to (48.85, 2.35)"));
    assert_eq!(fields.summary, "This journey will take 3 hours 31 mins");
    assert_eq!(fields.modes, vec!["Car", "Auto Train"]);
}

#[test]
fn card_fields_for_empty_summary_are_blank() {
    let fields = CardFields::from(TripSummary::default());
    assert_eq!(fields.distance, "");
    assert_eq!(fields.speed, " mph");
    assert!(fields.coordinates.is_none());
    assert!(fields.modes.is_empty());
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn rendered_card_shows_labels_speed_and_coordinates() {
    use leptos::tachys::view::RenderHtml;

    let html = Owner::new().with(|| view! { <ResultCard summary=full_summary()/> }.to_html());
    assert_eq!(html.matches("class=\"result-card\"").count(), 1);
    assert!(html.contains("55.8 mph"));
    assert!(html.contains("Car"));
    assert!(html.contains("Auto Train"));
    assert!(html.contains("Start / End (Lat, Lng):"));
    assert!(html.contains("195.3 mi"));
}
