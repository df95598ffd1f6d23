//! Shared test helpers for integration tests.
//!
//! The suite runs against a live PostgreSQL instance named by
//! `NOTEHUB_TEST_DATABASE_URL` (or `DATABASE_URL`). When neither is set,
//! [`TestApp::new`] returns `None` and each test skips itself.
//!
//! Tests share one database and run concurrently, so nothing here truncates
//! tables; tests isolate themselves with unique usernames and marker
//! strings instead.

use std::sync::atomic::{AtomicU32, Ordering};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use notehub_core::config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};

/// A password that satisfies the length and entropy policy.
pub const STRONG_PASSWORD: &str = "correct horse battery staple";

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Produce a name unique across tests and test runs.
pub fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{}_{nanos}_{n}", std::process::id())
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let url = std::env::var("NOTEHUB_TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                ..AuthConfig::default()
            },
            logging: LoggingConfig::default(),
        };

        let db_pool = notehub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        notehub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = notehub_api::build_state(config.clone(), db_pool.clone());
        let router = notehub_api::router::build_router(state);

        Some(Self {
            router,
            db_pool,
            config,
        })
    }

    /// Register a user through the API and assert success.
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Login and return the JWT access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a note through the API and return its response data.
    pub async fn create_note(
        &self,
        token: &str,
        title: &str,
        content: &str,
        public: bool,
    ) -> Value {
        let response = self
            .request(
                "POST",
                "/api/notes",
                Some(serde_json::json!({
                    "title": title,
                    "content": content,
                    "public": public,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Note creation failed: {:?}",
            response.body
        );

        response.body["data"].clone()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
