use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejections use the API error body
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ApiJson(value)),
                Err(rejection) => Err(ApiError::BadRequest {
                    message: rejection.body_text(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
