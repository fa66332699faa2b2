use super::*;

// =============================================================
// URLs
// =============================================================

#[test]
fn normalize_base_defaults_to_same_origin_api() {
    assert_eq!(normalize_base(None), "/api");
    assert_eq!(normalize_base(Some("   ")), "/api");
}

#[test]
fn normalize_base_trims_trailing_slashes() {
    assert_eq!(normalize_base(Some("https://clinic.example.com/api/")), "https://clinic.example.com/api");
}

#[test]
fn resolve_url_keeps_absolute_endpoints() {
    assert_eq!(resolve_url("/api", "/services/"), "/api/services/");
    assert_eq!(resolve_url("/api", "https://other.example.com/x"), "https://other.example.com/x");
}

#[test]
fn endpoints_match_backend_paths() {
    assert_eq!(dentist_endpoint(4), "/dentists/4/");
    assert_eq!(service_endpoint("implants"), "/services/implants/");
    let date = NaiveDate::from_ymd_opt(2030, 3, 7).unwrap();
    assert_eq!(available_slots_endpoint(date), "/appointments/available-slots/?date=2030-03-07");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn error_message_prefers_message_then_detail() {
    let body = r#"{"success": false, "message": "Validation error.", "detail": "ignored"}"#;
    assert_eq!(error_message(400, "Bad Request", body), "Validation error.");
    assert_eq!(error_message(401, "Unauthorized", r#"{"detail": "Invalid email or password."}"#), "Invalid email or password.");
}

#[test]
fn error_message_404_without_json_mentions_backend_configuration() {
    let msg = error_message(404, "Not Found", "");
    assert_eq!(msg, BACKEND_UNAVAILABLE_MESSAGE);
    assert!(msg.contains("backend"));
    assert!(msg.contains("API"));
    assert!(!msg.starts_with('{'));
}

#[test]
fn error_message_404_with_blank_detail_is_not_raw_json() {
    assert_eq!(error_message(404, "Not Found", r#"{"detail": ""}"#), BACKEND_UNAVAILABLE_MESSAGE);
}

#[test]
fn error_message_falls_back_to_status_text_then_code() {
    assert_eq!(error_message(500, "Internal Server Error", "<html>oops</html>"), "Internal Server Error");
    assert_eq!(error_message(502, "", ""), "Request failed with status 502");
}

#[test]
fn http_error_displays_normalized_message() {
    let err = http_error(403, "Forbidden", r#"{"detail": "Please verify your email before signing in."}"#);
    assert_eq!(err.to_string(), "Please verify your email before signing in.");
    assert!(matches!(err, ApiError::Http { status: 403, .. }));
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn unwrap_envelope_extracts_data() {
    let value = serde_json::json!({ "success": true, "data": [1, 2] });
    assert_eq!(unwrap_envelope(value), serde_json::json!([1, 2]));
}

#[test]
fn unwrap_envelope_leaves_plain_objects() {
    let value = serde_json::json!({ "data": 1 });
    assert_eq!(unwrap_envelope(value.clone()), value);
    let value = serde_json::json!({ "success": "yes", "data": 1 });
    assert_eq!(unwrap_envelope(value.clone()), value);
}

#[test]
fn decode_body_treats_204_as_empty_success() {
    let unit: Result<(), ApiError> = decode_body(204, "");
    assert!(unit.is_ok());
    let detail: Option<DetailResponse> = decode_body(204, "").unwrap();
    assert!(detail.is_none());
}

#[test]
fn decode_body_unwraps_enveloped_slots() {
    let body = r#"{"success": true, "data": [{"time": "09:00", "label": "9:00 AM"}]}"#;
    let slots: Vec<TimeSlot> = decode_body(200, body).unwrap();
    assert_eq!(slots, vec![TimeSlot { time: "09:00".to_owned(), label: "9:00 AM".to_owned() }]);
}

#[test]
fn decode_body_reports_shape_mismatch() {
    let result: Result<Vec<TimeSlot>, ApiError> = decode_body(200, r#"{"nope": 1}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn read_body_failure_is_network_error() {
    let result = read_body(Err::<String, _>("connection reset"));
    assert_eq!(result, Err(ApiError::Network("connection reset".to_owned())));
    assert_eq!(read_body(Ok::<_, String>("{}".to_owned())), Ok("{}".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(list_services());
    assert_eq!(result, Err(ApiError::Unavailable));
}
