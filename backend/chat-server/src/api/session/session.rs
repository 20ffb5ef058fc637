//! Profile handlers for the signed-in identity

use crate::{
    AccountService, ApiJson, ApiResult, AppState, CurrentIdentity, ProfileResponse,
    SuccessResponse, UpdateProfileRequest,
};

use axum::{Json, extract::State};

/// GET /session
pub async fn get_profile(CurrentIdentity(identity): CurrentIdentity) -> Json<ProfileResponse> {
    Json(identity.into())
}

/// POST /session
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    AccountService::from_state(&state)
        .rename(identity.id, req.name.as_deref())
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /session
///
/// Removes the account. Its conversation record is not deleted.
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<SuccessResponse>> {
    AccountService::from_state(&state)
        .delete(identity.id)
        .await?;

    log::info!("Deleted account {}", identity.id);

    Ok(Json(SuccessResponse::ok()))
}
