//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

use brandframe::models::AppConfig;
use brandframe::rendering::TextRenderer;
use brandframe::server::{build_router, create_app_state_with_text, AppState};
use brandframe::services::InMemoryDirectory;

/// Font database shared by every test app in this binary
fn shared_text() -> Arc<TextRenderer> {
    static TEXT: OnceLock<Arc<TextRenderer>> = OnceLock::new();
    TEXT.get_or_init(|| Arc::new(TextRenderer::new())).clone()
}

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub directory: Arc<InMemoryDirectory>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application from YAML configuration
    pub fn with_yaml(yaml: &str) -> Self {
        Self::with_config(AppConfig::from_yaml_str(yaml))
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = Self::create_state(config);

        // Keep references for test assertions
        let directory = state.directory.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, directory }
    }

    /// Create state for custom router configuration
    pub fn create_state(config: AppConfig) -> AppState {
        create_app_state_with_text(config, shared_text()).expect("Failed to create app state")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
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

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
