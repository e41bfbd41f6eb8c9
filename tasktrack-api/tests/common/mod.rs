/// Common test utilities for integration tests
///
/// Shared infrastructure for driving the router end-to-end:
/// - test database setup (migrations applied on connect)
/// - request builders and JSON response decoding
/// - registration/login helpers
///
/// The suite needs a PostgreSQL instance. When `TEST_DATABASE_URL` is not
/// set, `TestContext::new()` returns `None` and each test returns early, so
/// the rest of the workspace can be tested without a database.

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tasktrack_api::app::{build_router, AppState};
use tasktrack_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use tower::Service as _;
use uuid::Uuid;

/// Signing secret shared by the test app and token assertions
pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Test context containing the app under test and its database pool
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context, or `None` without `TEST_DATABASE_URL`
    pub async fn new() -> Option<Self> {
        let url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("skipping: TEST_DATABASE_URL not set");
                return None;
            }
        };

        let db = PgPool::connect(&url).await.expect("connect test database");

        // Path relative to the crate's Cargo.toml
        sqlx::migrate!("../migrations")
            .run(&db)
            .await
            .expect("run migrations");

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["http://localhost:5173".to_string()],
                production: false,
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: TEST_SECRET.to_string(),
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Some(TestContext { db, app })
    }

    /// Sends a JSON request and decodes the response
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value, HeaderMap) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json, headers)
    }

    /// Registers a user through the API
    pub async fn register(&self, name: &str, email: &str, password: &str) -> StatusCode {
        let (status, _, _) = self
            .send(
                Method::POST,
                "/user/register",
                None,
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                })),
            )
            .await;
        status
    }

    /// Logs in through the API, returning the raw token from the body
    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value, HeaderMap) {
        self.send(
            Method::POST,
            "/user/login",
            None,
            Some(serde_json::json!({
                "email": email,
                "password": password,
            })),
        )
        .await
    }

    /// Registers and logs in a fresh user, returning (email, token)
    pub async fn signed_up_user(&self) -> (String, String) {
        let email = unique_email();
        let status = self.register("Test User", &email, "hunter2!").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body, _) = self.login(&email, "hunter2!").await;
        assert_eq!(status, StatusCode::OK);

        let token = body["token"].as_str().expect("token in body").to_string();
        (email, token)
    }

    /// Removes a test user; owned tasks cascade
    pub async fn cleanup_user(&self, email: &str) {
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&self.db)
            .await
            .expect("cleanup user");
    }
}

/// Generates an email no other test run will collide with
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}
