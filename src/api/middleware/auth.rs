//! Shared-token authorization middleware.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::errors::AppError;

/// The `Authorization` header exactly as sent, or "" when absent.
///
/// No scheme prefix is stripped: the whole header value is the token.
pub fn presented_token(headers: &HeaderMap) -> &str {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
}

/// Token authorization middleware.
///
/// Rejects the request with 403 before any handler runs unless the
/// `Authorization` header matches the shared admin token.
pub async fn token_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = state
        .auth_service
        .validate_token(presented_token(request.headers()));

    if !authorized {
        tracing::debug!(path = %request.uri().path(), "Rejected request without valid token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
