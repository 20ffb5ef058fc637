//! Registration and login handlers

use crate::{
    AccountService, ApiJson, ApiResult, AppState, LoginRequest, SignupRequest, SuccessResponse,
};

use chat_auth::IssuedToken;

use axum::{Json, extract::State};

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let identity = AccountService::from_state(&state)
        .signup(req.name.as_deref(), &req.email, &req.password)
        .await?;

    log::info!("Registered identity {}", identity.id);

    Ok(Json(SuccessResponse::ok()))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<IssuedToken>> {
    let token = AccountService::from_state(&state)
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(token))
}
