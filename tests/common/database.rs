//! Test application fixture
//!
//! Every `TestApp` owns a fresh in-memory SQLite database with migrations
//! applied, so tests never share state.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use property_market::backend::routes::create_router;
use property_market::backend::server::config::load_database;
use property_market::backend::server::AppState;
use property_market::shared::{AppConfig, AppConfigBuilder};

/// Secret used to sign tokens in tests
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Test application fixture
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    /// Create a new fixture with an empty database
    pub async fn new() -> Self {
        Self::with_config(AppConfig::builder()).await
    }

    /// Create a fixture from a partly filled builder
    ///
    /// The database is always a fresh in-memory one.
    pub async fn with_config(builder: AppConfigBuilder) -> Self {
        let config = builder
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_JWT_SECRET)
            .build()
            .expect("Failed to build test configuration");

        let pool = load_database(&config)
            .await
            .expect("Failed to create test database");

        let state = AppState::new(pool, config);
        let router = create_router(state.clone());

        Self { router, state }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.state.db
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request and return the status and decoded JSON body
    ///
    /// Empty bodies decode as `Value::Null`; non-JSON bodies as a string.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a prepared request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, body).await
    }

    /// Count rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(self.pool())
            .await
            .expect("Failed to count rows")
    }
}
