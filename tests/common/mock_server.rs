//! Mock color naming server.

use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Path the mock naming API is served under
pub const NAMING_PATH: &str = "/v1/";

/// Wrapper around wiremock MockServer with color.pizza shaped responses
pub struct MockNamingServer {
    pub server: MockServer,
}

impl MockNamingServer {
    /// Start a new mock naming server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to put into `naming.base_url`
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), NAMING_PATH)
    }

    /// Answer any lookup with the given names, in order
    pub async fn mock_names(&self, names: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path(NAMING_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::body(names))
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer lookups for exactly `values` (comma-separated, no '#')
    pub async fn mock_names_for(&self, values: &str, names: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path(NAMING_PATH))
            .and(query_param("values", values))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::body(names))
                    .insert_header("content-type", "application/json"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Respond with a raw body
    pub async fn mock_raw(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path(NAMING_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a lookup that returns an error
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(NAMING_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }

    fn body(names: &[(&str, &str)]) -> serde_json::Value {
        let colors: Vec<serde_json::Value> = names
            .iter()
            .map(|(name, best_contrast)| {
                serde_json::json!({
                    "name": name,
                    "hex": "#000000",
                    "bestContrast": best_contrast,
                })
            })
            .collect();
        serde_json::json!({ "paletteTitle": "Test", "colors": colors })
    }
}
