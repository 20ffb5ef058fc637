//! Session resolution for authenticated endpoints

use crate::{ApiError, AppState};

use chat_auth::bearer_token;
use chat_core::Identity;
use chat_db::IdentityRepository;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The identity behind the request's bearer token.
///
/// Rejects with 401 when the header is missing or the token does not
/// verify, and with 404 when the token is valid but its identity has been
/// deleted. Runs before any body extractor, so unauthenticated requests
/// never reach the store.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let claims = state.jwt_validator.validate(token)?;
            let identity_id = claims.identity_id()?;

            let identity = IdentityRepository::new(state.pool.clone())
                .find_by_id(identity_id)
                .await?
                .ok_or_else(|| ApiError::not_found("User not found"))?;

            log::debug!("Resolved session for identity {}", identity.id);

            Ok(CurrentIdentity(identity))
        }
    }
}
