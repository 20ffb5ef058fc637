//! Integration tests for the CLI client using wiremock mock server

use chat_cli::{Client, ClientError};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn test_chat_returns_reply_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "message": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "hi" })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.chat("hello").await.unwrap();

    assert_eq!(result, json!({ "reply": "hi" }));
}

#[tokio::test]
async fn test_ask_anonymous_does_not_save() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("Plain answer")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/conversation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let outcome = client.ask("  What is Rust?  ").await.unwrap();

    assert_eq!(outcome.question, "What is Rust?");
    assert_eq!(outcome.answer, "Plain answer");
    assert!(!outcome.saved);
}

#[tokio::test]
async fn test_ask_signed_in_saves_serialized_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "hi" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/conversation"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "question": "hello",
            "answer": "{\"reply\":\"hi\"}"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "exchangeId": "00000000-0000-0000-0000-000000000001"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("tok"));
    let outcome = client.ask("hello").await.unwrap();

    assert_eq!(outcome.answer, "{\"reply\":\"hi\"}");
    assert!(outcome.saved);
    assert!(outcome.save_error.is_none());
}

#[tokio::test]
async fn test_ask_relay_error_becomes_answer_and_is_not_saved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": "UPSTREAM_RATE_LIMITED",
                "message": "Rate limit exceeded. Please try again in a few minutes."
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/conversation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("tok"));
    let outcome = client.ask("hello").await.unwrap();

    assert_eq!(
        outcome.answer,
        "Error: Rate limit exceeded. Please try again in a few minutes."
    );
    assert!(!outcome.saved);
}

#[tokio::test]
async fn test_ask_unreachable_server_gives_fallback_answer() {
    // Nothing listens on the discard port
    let client = Client::new("http://127.0.0.1:9", None);
    let outcome = client.ask("hello").await.unwrap();

    assert_eq!(outcome.answer, "Failed to get response. Please try again.");
    assert!(!outcome.saved);
}

#[tokio::test]
async fn test_ask_save_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("ok")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/conversation"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "User not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("tok"));
    let outcome = client.ask("hello").await.unwrap();

    assert_eq!(outcome.answer, "ok");
    assert!(!outcome.saved);
    assert!(outcome.save_error.unwrap().contains("User not found"));
}

#[tokio::test]
async fn test_list_conversation_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conversation"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "exchanges": [
                { "question": "q", "answer": "a", "timestamp": "2026-10-19T00:00:00Z" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("tok"));
    let result = client.list_conversation().await.unwrap();

    let exchanges = result["exchanges"].as_array().unwrap();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0]["question"], "q");
}

#[tokio::test]
async fn test_signed_in_commands_require_token() {
    let client = Client::new("http://127.0.0.1:9", None);

    let result = client.list_conversation().await;
    assert!(matches!(result, Err(ClientError::NotSignedIn { .. })));

    let result = client.delete_account().await;
    assert!(matches!(result, Err(ClientError::NotSignedIn { .. })));
}

#[tokio::test]
async fn test_signup_duplicate_email_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(body_json(json!({ "email": "a@b.c", "password": "pw" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "VALIDATION_ERROR",
                "message": "User already exists!",
                "field": "email"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.signup("a@b.c", "pw", None).await;

    match result {
        Err(ClientError::Api {
            status,
            code,
            message,
            ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(code, "VALIDATION_ERROR");
            assert_eq!(message, "User already exists!");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc",
            "expiresAt": 1_900_000_000
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.login("a@b.c", "pw").await.unwrap();

    assert_eq!(result["token"], "abc");
}

#[tokio::test]
async fn test_rename_without_name_sends_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_json(json!({ "name": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("tok"));
    let result = client.rename(None).await.unwrap();

    assert_eq!(result["success"], true);
}

#[tokio::test]
async fn test_error_without_envelope_uses_status_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/conversation"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("tok"));
    let result = client.clear_conversation().await;

    match result {
        Err(ClientError::Api { status, code, message, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(code, "UNKNOWN");
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
