//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response in the `{status, error}` shape
pub fn assert_json_error(response: &TestResponse, expected: StatusCode, fragment: &str) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());

    let json: serde_json::Value = response.json();
    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(fragment),
        "Expected error containing {fragment:?}, got {message:?}"
    );
}

/// Assert a palette color object has every field with a sane value
pub fn assert_valid_color(color: &serde_json::Value) {
    let hex = color["hex"].as_str().expect("hex should be a string");
    assert_eq!(hex.len(), 7, "hex should be #RRGGBB, got {hex}");
    assert!(hex.starts_with('#'));

    let rgb = color["rgb"].as_array().expect("rgb should be an array");
    assert_eq!(rgb.len(), 3);

    let luminance = color["luminance"].as_f64().expect("luminance should be a number");
    assert!((0.0..=1.0).contains(&luminance), "luminance {luminance}");

    let ink = color["ink"].as_str().expect("ink should be a string");
    assert!(ink == "black" || ink == "white", "ink {ink}");
}
