//! JSON body extractor answering every malformed body with 400.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections are plain `400 Bad Request`.
///
/// Axum's own `Json` answers type mismatches with 422 and a missing
/// content type with 415; the admin frontend expects 400 for all of them.
///
/// ```rust,ignore
/// async fn add_guest(JsonBody(input): JsonBody<GuestInput>) { /* ... */ }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(status = %e.status(), "Rejected request body: {}", e.body_text());
            AppError::bad_request(e.body_text())
        })?;

        Ok(JsonBody(value))
    }
}
