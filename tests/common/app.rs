//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use inkpal::models::{AppConfig, NamingConfig};
use inkpal::server::{build_router, create_app_state};
use inkpal::services::PaletteService;

/// Test application with router and direct access to the palette service
pub struct TestApp {
    router: axum::Router,
    pub service: Arc<PaletteService>,
}

impl TestApp {
    /// Create a new test application with default settings and naming disabled
    pub fn new() -> Self {
        Self::with_config(Self::offline_config())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let state = create_app_state(config);
        let service = state.service.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, service }
    }

    /// Create a test application that looks up names at `base_url`
    pub fn with_naming_url(base_url: &str) -> Self {
        Self::with_config(AppConfig {
            naming: NamingConfig {
                enabled: true,
                base_url: base_url.to_string(),
                timeout_secs: 5,
            },
            ..Default::default()
        })
    }

    /// Default config with naming switched off
    pub fn offline_config() -> AppConfig {
        AppConfig {
            naming: NamingConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Fetch a palette and return the parsed JSON body
    pub async fn palette(&self, query: &str) -> serde_json::Value {
        let response = self.get(&format!("/api/palette?{query}")).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        response.json()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
