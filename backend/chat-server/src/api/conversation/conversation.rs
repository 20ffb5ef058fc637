//! Conversation REST API handlers

use crate::{
    AppendExchangeRequest, AppendExchangeResponse, ApiJson, ApiResult, AppState,
    ConversationResponse, ConversationService, CurrentIdentity, ExchangeDto, SuccessResponse,
};

use axum::{Json, extract::State};

/// GET /conversation
pub async fn list_conversation(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<ConversationResponse>> {
    let service = ConversationService::new(state.pool.clone());

    let response = match service.list(identity.id).await? {
        Some(record) => ConversationResponse {
            id: Some(record.id.to_string()),
            exchanges: record.exchanges.into_iter().map(ExchangeDto::from).collect(),
        },
        None => ConversationResponse {
            id: None,
            exchanges: Vec::new(),
        },
    };

    Ok(Json(response))
}

/// POST /conversation
pub async fn append_exchange(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    ApiJson(req): ApiJson<AppendExchangeRequest>,
) -> ApiResult<Json<AppendExchangeResponse>> {
    let service = ConversationService::new(state.pool.clone());

    let exchange = service
        .append(identity.id, req.question.as_ref(), req.answer)
        .await?;

    log::info!(
        "Stored exchange {} for identity {}",
        exchange.id,
        identity.id
    );

    Ok(Json(AppendExchangeResponse {
        success: true,
        exchange_id: exchange.id.to_string(),
        exchange: exchange.into(),
    }))
}

/// DELETE /conversation
pub async fn clear_conversation(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<SuccessResponse>> {
    ConversationService::new(state.pool.clone())
        .clear(identity.id)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
