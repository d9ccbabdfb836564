//! Tests for color naming against a mock color.pizza server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockNamingServer, TestApp};
use contrast_palette::{Color, InkColor, Palette};
use inkpal::services::{
    enrich_color, enrich_palette, ColorNamer, ColorPizzaClient, Enrichment, NamingError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LIGHT_SEEDS: &str = "keep=FFFFFF,FFFF00,CCFFCC,FFE0E0,E0E0FF&count=5&seed=12";

fn client(server: &MockNamingServer) -> Arc<ColorPizzaClient> {
    Arc::new(ColorPizzaClient::new(
        server.base_url(),
        Duration::from_secs(5),
    ))
}

/// Run a blocking lookup off the async executor
async fn lookup(
    client: Arc<ColorPizzaClient>,
    hexes: &[&str],
) -> Result<Vec<inkpal::services::ColorName>, NamingError> {
    let hexes: Vec<String> = hexes.iter().map(|h| h.to_string()).collect();
    tokio::task::spawn_blocking(move || client.lookup(&hexes))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_lookup_sends_values_without_hash() {
    let server = MockNamingServer::start().await;
    server
        .mock_names_for("979AC4,000080", &[("Lavender Blue", "black"), ("Navy", "white")])
        .await;

    let names = lookup(client(&server), &["#979AC4", "#000080"])
        .await
        .unwrap();

    assert_eq!(names.len(), 2);
    assert_eq!(names[0].name, "Lavender Blue");
    assert_eq!(names[0].best_contrast, Some(InkColor::Black));
    assert_eq!(names[1].name, "Navy");
    assert_eq!(names[1].best_contrast, Some(InkColor::White));
}

#[tokio::test]
async fn test_lookup_http_error() {
    let server = MockNamingServer::start().await;
    server.mock_error(500, "upstream down").await;

    let err = lookup(client(&server), &["#FFFFFF"]).await.unwrap_err();
    assert!(matches!(err, NamingError::Status(500)), "{err}");
}

#[tokio::test]
async fn test_lookup_empty_colors() {
    let server = MockNamingServer::start().await;
    server.mock_raw(r#"{"paletteTitle": "Nothing", "colors": []}"#).await;

    let err = lookup(client(&server), &["#FFFFFF"]).await.unwrap_err();
    assert!(matches!(err, NamingError::NoColors), "{err}");
}

#[tokio::test]
async fn test_lookup_invalid_json() {
    let server = MockNamingServer::start().await;
    server.mock_raw("<html>not json</html>").await;

    let err = lookup(client(&server), &["#FFFFFF"]).await.unwrap_err();
    assert!(matches!(err, NamingError::InvalidResponse(_)), "{err}");
}

#[tokio::test]
async fn test_lookup_ignores_unknown_ink() {
    let server = MockNamingServer::start().await;
    server.mock_names(&[("Odd", "purple")]).await;

    let names = lookup(client(&server), &["#FFFFFF"]).await.unwrap();
    assert_eq!(names[0].name, "Odd");
    assert_eq!(names[0].best_contrast, None);
}

#[tokio::test]
async fn test_enrich_palette_in_one_request() {
    let server = MockNamingServer::start().await;
    server
        .mock_names(&[
            ("One", "white"),
            ("Two", "white"),
            ("Three", "white"),
            ("Four", "white"),
            ("Five", "white"),
            ("Six", "black"),
        ])
        .await;

    let palette = Palette::new(4.5, 5, Vec::new(), &mut StdRng::seed_from_u64(4)).unwrap();
    let original = palette.clone();
    let namer = client(&server);

    let result = tokio::task::spawn_blocking(move || enrich_palette(palette, namer.as_ref()))
        .await
        .unwrap();

    assert_eq!(server.request_count().await, 1);
    // Six names for five colors plus one or two contrasts
    assert_eq!(result.outcome, Enrichment::Enriched { named: 6 });
    assert_eq!(result.value.colors()[0].name(), Some("One"));
    assert_eq!(result.value.colors()[4].name(), Some("Five"));
    assert_eq!(result.value.contrasts()[0].name(), Some("Six"));

    // Names only; inks stay as computed
    for (named, plain) in result.value.all_colors().zip(original.all_colors()) {
        assert_eq!(named.hex(), plain.hex());
        assert_eq!(named.ink(), plain.ink());
    }
}

#[tokio::test]
async fn test_enrich_color_failure_is_reported() {
    let server = MockNamingServer::start().await;
    server.mock_error(503, "busy").await;

    let color = Color::from_hex("#979AC4").unwrap();
    let expected = color.clone();
    let namer = client(&server);

    let result = tokio::task::spawn_blocking(move || enrich_color(color, namer.as_ref()))
        .await
        .unwrap();

    assert_eq!(result.value, expected);
    assert_eq!(
        result.outcome,
        Enrichment::NotEnriched {
            reason: "naming service returned HTTP 503".to_string()
        }
    );
}

#[tokio::test]
async fn test_api_palette_with_names() {
    let server = MockNamingServer::start().await;
    server
        .mock_names(&[
            ("White", "black"),
            ("Light Lavender", "black"),
            ("Misty Rose", "black"),
            ("Tea Green", "black"),
            ("Yellow", "black"),
            ("Dark Contrast", "white"),
        ])
        .await;

    let app = TestApp::with_naming_url(&server.base_url());
    let json = app.palette(&format!("{LIGHT_SEEDS}&names=true")).await;

    assert_eq!(json["naming"]["status"], "enriched");
    assert_eq!(json["naming"]["named"], 6);

    let colors = json["colors"].as_array().unwrap();
    assert!(colors.iter().all(|c| c["name"].is_string()));
    assert_eq!(json["contrasts"][0]["name"], "Dark Contrast");
}

#[tokio::test]
async fn test_api_palette_names_failure_still_succeeds() {
    let server = MockNamingServer::start().await;
    server.mock_error(500, "boom").await;

    let app = TestApp::with_naming_url(&server.base_url());
    let json = app.palette(&format!("{LIGHT_SEEDS}&names=true")).await;

    assert_eq!(json["naming"]["status"], "not_enriched");
    assert_eq!(json["naming"]["reason"], "naming service returned HTTP 500");
    assert_eq!(json["colors"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_api_palette_without_names_skips_lookup() {
    let server = MockNamingServer::start().await;
    server.mock_names(&[("Unused", "black")]).await;

    let app = TestApp::with_naming_url(&server.base_url());
    let json = app.palette("seed=3").await;

    assert!(json["naming"].is_null());
    assert_eq!(server.request_count().await, 0);
}

#[tokio::test]
async fn test_api_color_with_names_takes_service_ink() {
    let server = MockNamingServer::start().await;
    server
        .mock_names_for("979AC4", &[("Lavender Blue", "white")])
        .await;

    let app = TestApp::with_naming_url(&server.base_url());
    let response = app.get("/api/color/979AC4?names=true").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["color"]["name"], "Lavender Blue");
    assert_eq!(json["color"]["ink"], "white");
    assert_eq!(json["naming"]["status"], "enriched");
    assert_eq!(json["naming"]["named"], 1);
}
