#![allow(dead_code)]

//! Test infrastructure for chat-server API tests

use chat_auth::hash_password;
use chat_core::Identity;
use chat_db::{IdentityRepository, MIGRATOR};
use chat_relay::{ChatbotRelay, RelayPolicy};
use chat_server::AppState;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use url::Url;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!!";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Relay policy with short waits so failure paths stay fast
pub fn fast_policy() -> RelayPolicy {
    RelayPolicy {
        max_attempts: 2,
        attempt_timeout: Duration::from_millis(500),
        backoff_step: Duration::from_millis(10),
    }
}

/// AppState whose relay points at `chatbot_url`
pub async fn create_test_app_state_with_relay(chatbot_url: &str) -> AppState {
    let pool = create_test_pool().await;
    let relay = ChatbotRelay::with_policy(Url::parse(chatbot_url).unwrap(), fast_policy())
        .expect("Failed to build relay");

    AppState::new(pool, relay, TEST_SECRET, 3600)
}

/// AppState for tests that never reach the chatbot
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_relay("http://127.0.0.1:9/chatbot").await
}

/// Register an identity directly in the store and sign a token for it
pub async fn create_signed_in_identity(state: &AppState, email: &str) -> (Identity, String) {
    let identity = Identity::new(
        email.to_string(),
        Some("Test User".to_string()),
        hash_password(TEST_PASSWORD).unwrap(),
    );
    IdentityRepository::new(state.pool.clone())
        .create(&identity)
        .await
        .expect("Failed to create test identity");

    let token = state
        .token_issuer
        .issue(identity.id, &identity.email)
        .unwrap()
        .token;

    (identity, token)
}

/// Build a request with an optional bearer token and optional JSON body
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Number of exchanges stored across all conversations
pub async fn count_exchanges(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM exchanges")
        .fetch_one(pool)
        .await
        .unwrap()
}
