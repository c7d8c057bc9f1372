//! Admin session handlers.

use axum::{extract::State, http::HeaderMap, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::middleware::presented_token;
use crate::api::AppState;
use crate::errors::AppResult;

/// Admin login request
///
/// Missing fields deserialize as empty strings and simply fail to match.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin email address
    #[serde(default)]
    #[schema(example = "admin@example.com")]
    pub email: String,
    /// Admin password
    #[serde(default)]
    #[schema(example = "secret")]
    pub password: String,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/validate-token", post(validate_token))
}

/// Login and get the shared admin token
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin token", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body", body = String, content_type = "text/plain"),
        (status = 401, description = "Invalid credentials", body = String, content_type = "text/plain")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<String> {
    state
        .auth_service
        .login(payload.email, payload.password)
        .await
}

/// Acknowledge a logout. The shared token stays valid.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "Admin",
    responses(
        (status = 200, description = "Logout acknowledged", body = String, content_type = "text/plain")
    )
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    state.auth_service.logout(presented_token(&headers));
    "Logged out successfully"
}

/// Check whether the `Authorization` header carries the admin token
#[utoipa::path(
    post,
    path = "/api/admin/validate-token",
    tag = "Admin",
    responses(
        (status = 200, description = "Whether the token is valid", body = bool)
    )
)]
pub async fn validate_token(State(state): State<AppState>, headers: HeaderMap) -> Json<bool> {
    Json(state.auth_service.validate_token(presented_token(&headers)))
}
