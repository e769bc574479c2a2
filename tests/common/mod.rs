//! Common test utilities for HTTP tests
//!
//! Builds the application router over either the in-memory store or a
//! PostgreSQL container, and provides request/response helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use config::{File, FileFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use contacts_service::infrastructure::driven_adapters::config::{AppConfig, AppMode};
use contacts_service::infrastructure::driven_adapters::contact_repository::{
    InMemoryContactRepository, PostgresContactRepository,
};
use contacts_service::infrastructure::driven_adapters::database;
use contacts_service::infrastructure::driving_adapters::api_rest::router::build_router;
use contacts_service::infrastructure::driving_adapters::api_rest::AppState;

/// Directory holding the fake front-end build used by production-mode tests
pub fn fixture_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site")
}

/// Build a test configuration for the given mode
pub fn create_test_config(mode: AppMode) -> AppConfig {
    let mode = match mode {
        AppMode::Development => "development",
        AppMode::Production => "production",
    };
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0
mode = "{mode}"

[database]
backend = "memory"

[frontend]
static_dir = "{}"
"#,
        fixture_site_dir().display()
    );

    AppConfig::with_defaults()
        .expect("Failed to seed defaults")
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// A development-mode app over a fresh in-memory store
    pub fn new() -> Self {
        Self::with_mode(AppMode::Development)
    }

    /// A production-mode app over a fresh in-memory store
    pub fn production() -> Self {
        Self::with_mode(AppMode::Production)
    }

    fn with_mode(mode: AppMode) -> Self {
        let config = create_test_config(mode);
        let state = AppState::new(Arc::new(InMemoryContactRepository::new()));

        Self {
            router: build_router(state, &config),
        }
    }

    /// Send a request and return the raw response status and body bytes
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        send(&self.router, method, uri, body).await
    }

    /// Send a request and parse the body as JSON
    pub async fn send_json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = serde_json::from_slice(&bytes).expect("Response body is not JSON");
        (status, value)
    }

    /// Create a contact and return it
    pub async fn create_contact(&self, body: Value) -> ContactResponse {
        let (status, value) = self.send_json(Method::POST, "/api/contacts", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(value).expect("Invalid contact body")
    }

    /// List all contacts
    pub async fn list_contacts(&self) -> Vec<ContactResponse> {
        let (status, value) = self.send_json(Method::GET, "/api/contacts", None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(value).expect("Invalid contact list body")
    }
}

/// Test application context backed by a PostgreSQL container
pub struct PostgresTestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresTestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let mut config = create_test_config(AppMode::Development);
        config.database.url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = database::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(Arc::new(PostgresContactRepository::new(pool.clone())));

        Self {
            router: build_router(state, &config),
            pool,
            _container: container,
        }
    }

    /// Send a request and parse the body as JSON
    pub async fn send_json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(&self.router, method, uri, body).await;
        let value = serde_json::from_slice(&bytes).expect("Response body is not JSON");
        (status, value)
    }

    /// Clear all data from the database
    pub async fn clear_database(&self) {
        sqlx::query("TRUNCATE TABLE contacts")
            .execute(&self.pool)
            .await
            .expect("Failed to truncate contacts table");
    }
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router call failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

/// Contact response structure for deserialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
