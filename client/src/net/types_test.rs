use super::*;
use serde_json::json;

// =============================================================
// TripQuery
// =============================================================

#[test]
fn trip_query_serializes_origin_and_destination_only() {
    let query = TripQuery { origin: "Leeds".to_owned(), destination: String::new() };
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value, json!({"origin": "Leeds", "destination": ""}));
}

// =============================================================
// parse_summary_response
// =============================================================

#[test]
fn parse_success_body_yields_summary() {
    let body = r#"{"origin":"A","destination":"B","waypoints":[],"distance_travelled":"5mi","total_time":"1h","avg_speed":5,"modes_of_transportation":["driving"],"summary":"ok"}"#;
    let SummaryOutcome::Summary(summary) = parse_summary_response(body) else {
        panic!("expected summary");
    };
    assert_eq!(summary.origin, "A");
    assert_eq!(summary.destination, "B");
    assert_eq!(summary.waypoints, json!([]));
    assert_eq!(summary.distance_travelled, json!("5mi"));
    assert_eq!(summary.total_time, json!("1h"));
    assert_eq!(summary.avg_speed, json!(5));
    assert_eq!(summary.modes_of_transportation, vec!["driving".to_owned()]);
    assert_eq!(summary.summary, "ok");
    assert!(summary.lat_lng.is_none());
}

#[test]
fn parse_success_body_accepts_coordinates_and_extra_fields() {
    let body = r#"{
        "origin": "Dover",
        "destination": "Calais",
        "waypoints": 12,
        "lat_lng": [{"lat": 51.12, "lng": 1.31}, {"lat": 50.95, "lng": 1.85}],
        "something_new": true
    }"#;
    let SummaryOutcome::Summary(summary) = parse_summary_response(body) else {
        panic!("expected summary");
    };
    let (start, end) = summary.lat_lng.unwrap();
    assert!((start.lat - 51.12).abs() < f64::EPSILON);
    assert!((end.lng - 1.85).abs() < f64::EPSILON);
    assert_eq!(summary.waypoints, json!(12));
}

#[test]
fn parse_missing_fields_default_to_empty() {
    let SummaryOutcome::Summary(summary) = parse_summary_response("{}") else {
        panic!("expected summary");
    };
    assert_eq!(summary, TripSummary::default());
    assert!(summary.avg_speed.is_null());
}

#[test]
fn parse_error_body_yields_rejection() {
    assert_eq!(
        parse_summary_response(r#"{"error":"No route found"}"#),
        SummaryOutcome::Rejected("No route found".to_owned())
    );
}

#[test]
fn parse_error_field_wins_over_summary_fields() {
    let body = r#"{"error":"We are unable to find that origin.","origin":"Nowhere"}"#;
    assert_eq!(
        parse_summary_response(body),
        SummaryOutcome::Rejected("We are unable to find that origin.".to_owned())
    );
}

#[test]
fn parse_empty_error_is_not_a_rejection() {
    let outcome = parse_summary_response(r#"{"error":"","origin":"A"}"#);
    assert!(matches!(outcome, SummaryOutcome::Summary(ref s) if s.origin == "A"));
}

#[test]
fn parse_non_json_body_fails() {
    let outcome = parse_summary_response("<html>502 Bad Gateway</html>");
    assert!(matches!(outcome, SummaryOutcome::Failed(ref msg) if msg.starts_with("invalid response body")));
}

#[test]
fn parse_non_object_json_fails() {
    let outcome = parse_summary_response(r#"["A", "B", 3]"#);
    assert!(matches!(outcome, SummaryOutcome::Failed(ref msg) if msg.starts_with("unexpected summary shape")));
}

// =============================================================
// Lenient summary fields
// =============================================================

#[test]
fn parse_null_text_fields_render_empty() {
    let body = r#"{"origin":"A","destination":null,"summary":null,"avg_speed":null,"modes_of_transportation":["driving"]}"#;
    let SummaryOutcome::Summary(summary) = parse_summary_response(body) else {
        panic!("expected summary");
    };
    assert_eq!(summary.origin, "A");
    assert_eq!(summary.destination, "");
    assert_eq!(summary.summary, "");
    assert!(summary.avg_speed.is_null());
    assert_eq!(summary.modes_of_transportation, vec!["driving".to_owned()]);
}

#[test]
fn parse_non_string_text_fields_are_stringified() {
    let SummaryOutcome::Summary(summary) = parse_summary_response(r#"{"origin":12,"summary":true}"#) else {
        panic!("expected summary");
    };
    assert_eq!(summary.origin, "12");
    assert_eq!(summary.summary, "true");
}

#[test]
fn parse_null_modes_become_empty_list() {
    let SummaryOutcome::Summary(summary) = parse_summary_response(r#"{"origin":"A","modes_of_transportation":null}"#)
    else {
        panic!("expected summary");
    };
    assert!(summary.modes_of_transportation.is_empty());
}

#[test]
fn parse_single_mode_string_becomes_one_entry() {
    let SummaryOutcome::Summary(summary) = parse_summary_response(r#"{"modes_of_transportation":"ferry"}"#) else {
        panic!("expected summary");
    };
    assert_eq!(summary.modes_of_transportation, vec!["ferry".to_owned()]);
}

#[test]
fn parse_mixed_mode_entries_skip_nulls() {
    let SummaryOutcome::Summary(summary) = parse_summary_response(r#"{"modes_of_transportation":["driving",null,7]}"#)
    else {
        panic!("expected summary");
    };
    assert_eq!(summary.modes_of_transportation, vec!["driving".to_owned(), "7".to_owned()]);
}

#[test]
fn parse_malformed_coordinates_keep_the_trip() {
    let body = r#"{
        "origin": "London",
        "destination": "Leeds",
        "lat_lng": [{"lat": "51.5", "lng": -0.12}, {"lat": 53.8, "lng": -1.55}]
    }"#;
    let SummaryOutcome::Summary(summary) = parse_summary_response(body) else {
        panic!("expected summary");
    };
    assert_eq!(summary.origin, "London");
    assert!(summary.lat_lng.is_none());
}

#[test]
fn parse_null_coordinates_are_absent() {
    let SummaryOutcome::Summary(summary) = parse_summary_response(r#"{"origin":"A","lat_lng":null}"#) else {
        panic!("expected summary");
    };
    assert!(summary.lat_lng.is_none());
}
