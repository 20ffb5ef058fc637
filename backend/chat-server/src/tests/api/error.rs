use crate::ApiError;

use chat_auth::AuthError;
use chat_core::CoreError;
use chat_relay::{FailureKind, RelayError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("User not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Question must be a valid string".into(),
        field: Some("question".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "question");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Unauthorized")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Database operation failed")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_relay_timeout_maps_to_504_with_user_message() {
    let error: ApiError = RelayError::from_failure(FailureKind::Timeout).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["error"]["code"], "UPSTREAM_TIMEOUT");
    assert_eq!(
        json["error"]["message"],
        "Chatbot service is taking too long to respond. Please try again."
    );
}

#[tokio::test]
async fn test_relay_bad_request_maps_to_validation_on_message_field() {
    let error: ApiError = RelayError::bad_request().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "message");
    assert_eq!(json["error"]["message"], "Valid message is required");
}

#[tokio::test]
async fn test_relay_name_resolution_maps_to_503_not_found_code() {
    let error: ApiError = RelayError::from_failure(FailureKind::NameResolution {
        detail: "dns error".into(),
    })
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "UPSTREAM_NOT_FOUND");
}

#[tokio::test]
async fn test_core_validation_keeps_field() {
    let error: ApiError = CoreError::validation("answer", "Answer is required").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "answer");
    assert_eq!(json["error"]["message"], "Answer is required");
}

#[tokio::test]
async fn test_auth_missing_header_maps_to_401() {
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, _json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_password_hash_failure_maps_to_500() {
    let error: ApiError = AuthError::PasswordHash {
        message: "bad params".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"]["message"].as_str().unwrap().contains("bad params"));
}
