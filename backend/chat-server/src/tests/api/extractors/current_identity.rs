use crate::{ApiError, AppState, CurrentIdentity};

use chat_core::Identity;
use chat_db::{IdentityRepository, MIGRATOR};
use chat_relay::ChatbotRelay;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use url::Url;

const SECRET: &[u8] = b"extractor-test-secret-32-bytes-long!";

async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test pool");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    let relay = ChatbotRelay::new(Url::parse("http://127.0.0.1:9/chatbot").unwrap()).unwrap();

    AppState::new(pool, relay, SECRET, 3600)
}

async fn extract(
    state: &AppState,
    authorization: Option<&str>,
) -> Result<CurrentIdentity, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    CurrentIdentity::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_token_resolves_identity() {
    let state = create_test_state().await;
    let identity = Identity::new("ada@example.com".into(), None, "x".into());
    IdentityRepository::new(state.pool.clone())
        .create(&identity)
        .await
        .unwrap();
    let token = state.token_issuer.issue(identity.id, &identity.email).unwrap();

    let result = extract(&state, Some(&format!("Bearer {}", token.token))).await;

    let CurrentIdentity(resolved) = result.unwrap();
    assert_eq!(resolved.id, identity.id);
    assert_eq!(resolved.email, "ada@example.com");
}

#[tokio::test]
async fn test_extractor_without_header_is_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_garbage_token_is_unauthorized() {
    let state = create_test_state().await;

    let result = extract(&state, Some("Bearer not-a-jwt")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_token_of_deleted_identity_is_not_found() {
    let state = create_test_state().await;
    let token = state
        .token_issuer
        .issue(uuid::Uuid::new_v4(), "gone@example.com")
        .unwrap();

    let result = extract(&state, Some(&format!("Bearer {}", token.token))).await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}
