use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Local version of [`axum::extract::Path`] that reports unparseable segments as
/// `400 Bad Request` with the API's JSON error body.
///
/// Guarded handlers take `Result<Path<T>, AppError>` so the role check runs first.
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(inner) => Ok(Path(inner.0)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
