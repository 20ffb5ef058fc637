//! Chatbot relay handler

use crate::{ApiJson, ApiResult, AppState};

use chat_relay::parse_message;

use axum::{Json, extract::State};
use serde_json::Value;

/// POST /chat
///
/// Anonymous. Forwards `{message}` to the chatbot and returns its JSON reply
/// unchanged.
pub async fn relay_message(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<Json<Value>> {
    let message = parse_message(body.get("message"))?;

    let reply = state.relay.relay(message).await?;

    Ok(Json(reply))
}
