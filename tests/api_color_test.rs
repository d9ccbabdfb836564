//! Tests for /api/color/{hex} endpoint.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_color_lavender() {
    let app = TestApp::new();
    let response = app.get("/api/color/979ac4").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    let color = &json["color"];
    common::assert_valid_color(color);

    assert_eq!(color["hex"], "#979AC4");
    assert_eq!(color["rgb"], serde_json::json!([151, 154, 196]));
    assert_eq!(color["ink"], "black");
    assert!((color["luminance"].as_f64().unwrap() - 0.3368).abs() < 1e-3);
    assert!(json["naming"].is_null());
}

#[tokio::test]
async fn test_color_contrast_against_inks() {
    let app = TestApp::new();
    let json: serde_json::Value = app.get("/api/color/000080").await.json();

    assert_eq!(json["color"]["ink"], "white");
    let vs_white = json["contrast_with_white"].as_f64().unwrap();
    let vs_black = json["contrast_with_black"].as_f64().unwrap();
    assert!(vs_white > 15.0, "navy on white: {vs_white}");
    assert!(vs_black < 1.5, "navy on black: {vs_black}");
}

#[tokio::test]
async fn test_color_encoded_hash() {
    let app = TestApp::new();
    let response = app.get("/api/color/%23FFFF00").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["color"]["hex"], "#FFFF00");
    assert_eq!(json["color"]["ink"], "black");
}

#[tokio::test]
async fn test_color_invalid_hex() {
    let app = TestApp::new();

    let response = app.get("/api/color/12345").await;
    common::assert_json_error(&response, StatusCode::BAD_REQUEST, "expected 6 digits");

    let response = app.get("/api/color/ZZZZZZ").await;
    common::assert_json_error(&response, StatusCode::BAD_REQUEST, "invalid hex digits");
}

#[tokio::test]
async fn test_color_malformed_names_flag() {
    let app = TestApp::new();
    let response = app.get("/api/color/FFFFFF?names=maybe").await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST, "names");
}
