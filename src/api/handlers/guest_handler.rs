//! Guest handlers.
//!
//! Every route here sits behind the token middleware.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{GuestInput, GuestView, RoomView};
use crate::errors::AppResult;

/// Body of `GET /all` when there are no guests at all
const NO_GUESTS_FOUND: &str = "No Guests Found";

/// Target room for a new guest
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AddGuestQuery {
    /// Room to admit the guest into
    #[param(example = 101)]
    pub room_number: i32,
}

/// Payment status update parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaymentStatusQuery {
    /// Billing month, e.g. `2024-03`. Accepted but not stored.
    #[param(example = "2024-03")]
    pub month: String,
    /// New payment status
    #[param(example = "paid")]
    pub status: String,
}

/// Create guest routes
pub fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_guest))
        .route("/all", get(get_all_guests))
        .route("/available-rooms", get(get_available_rooms))
        .route("/dashboard/stats", get(get_dashboard_stats))
        .route("/guest/:id", get(get_guest_by_id))
        .route("/update/:id", put(update_guest))
        .route("/delete/:id", delete(delete_guest))
        // `:id` is a room number for GET and a guest id for DELETE
        .route("/:id", get(get_guests_by_room).delete(delete_guest))
        .route("/:id/payment-status", post(update_payment_status))
}

/// Admit a guest into a room
#[utoipa::path(
    post,
    path = "/api/guests/add",
    tag = "Guests",
    security(("admin_token" = [])),
    params(AddGuestQuery),
    request_body = GuestInput,
    responses(
        (status = 200, description = "Guest admitted", body = GuestView),
        (status = 400, description = "Room not found, room is full or malformed body", body = String, content_type = "text/plain"),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn add_guest(
    State(state): State<AppState>,
    Query(query): Query<AddGuestQuery>,
    JsonBody(input): JsonBody<GuestInput>,
) -> AppResult<Json<GuestView>> {
    let guest = state
        .guest_service
        .add_guest(input, query.room_number)
        .await?;
    Ok(Json(guest))
}

/// List every guest
#[utoipa::path(
    get,
    path = "/api/guests/all",
    tag = "Guests",
    security(("admin_token" = [])),
    responses(
        (status = 200, description = "All guests, or the text `No Guests Found`", body = Vec<GuestView>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn get_all_guests(State(state): State<AppState>) -> AppResult<Response> {
    let guests = state.guest_service.get_all_guests().await?;

    if guests.is_empty() {
        return Ok(NO_GUESTS_FOUND.into_response());
    }
    Ok(Json(guests).into_response())
}

/// List the guests of one room
#[utoipa::path(
    get,
    path = "/api/guests/{id}",
    tag = "Guests",
    security(("admin_token" = [])),
    params(
        ("id" = i32, Path, description = "Room number")
    ),
    responses(
        (status = 200, description = "Guests in the room", body = Vec<GuestView>),
        (status = 400, description = "Room not found", body = String, content_type = "text/plain"),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn get_guests_by_room(
    State(state): State<AppState>,
    Path(room_number): Path<i32>,
) -> AppResult<Json<Vec<GuestView>>> {
    let guests = state.guest_service.get_guests_by_room(room_number).await?;
    Ok(Json(guests))
}

/// Get a guest by ID
#[utoipa::path(
    get,
    path = "/api/guests/guest/{id}",
    tag = "Guests",
    security(("admin_token" = [])),
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest", body = GuestView),
        (status = 400, description = "Guest not found", body = String, content_type = "text/plain"),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn get_guest_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GuestView>> {
    let guest = state.guest_service.get_guest_by_id(id).await?;
    Ok(Json(guest))
}

/// Look up a guest for editing
///
/// Supplied fields are not applied; the stored guest is returned unchanged.
/// An unknown id answers `Guest not found` (lower-case "not"), the same text
/// as every other guest lookup.
#[utoipa::path(
    put,
    path = "/api/guests/update/{id}",
    tag = "Guests",
    security(("admin_token" = [])),
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    request_body = GuestInput,
    responses(
        (status = 200, description = "Stored guest", body = GuestView),
        (status = 400, description = "Guest not found", body = String, content_type = "text/plain"),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(input): JsonBody<GuestInput>,
) -> AppResult<Json<GuestView>> {
    let guest = state.guest_service.update_guest(input, id).await?;
    Ok(Json(guest))
}

/// Delete a guest
#[utoipa::path(
    delete,
    path = "/api/guests/delete/{id}",
    tag = "Guests",
    security(("admin_token" = [])),
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgement", body = String, content_type = "text/plain"),
        (status = 400, description = "Guest not found", body = String, content_type = "text/plain"),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<String> {
    state.guest_service.delete_guest(id).await
}

/// List rooms with a free slot
#[utoipa::path(
    get,
    path = "/api/guests/available-rooms",
    tag = "Guests",
    security(("admin_token" = [])),
    responses(
        (status = 200, description = "Rooms with fewer guests than capacity", body = Vec<RoomView>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RoomView>>> {
    let rooms = state.guest_service.get_available_rooms().await?;
    Ok(Json(rooms))
}

/// Overwrite a guest's payment status
#[utoipa::path(
    post,
    path = "/api/guests/{id}/payment-status",
    tag = "Guests",
    security(("admin_token" = [])),
    params(
        ("id" = i32, Path, description = "Guest ID"),
        PaymentStatusQuery
    ),
    responses(
        (status = 200, description = "Updated guest", body = GuestView),
        (status = 400, description = "Guest not found", body = String, content_type = "text/plain"),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<PaymentStatusQuery>,
) -> AppResult<Json<GuestView>> {
    let guest = state
        .guest_service
        .update_payment_status(id, query.month, query.status)
        .await?;
    Ok(Json(guest))
}

/// Dashboard listing
#[utoipa::path(
    get,
    path = "/api/guests/dashboard/stats",
    tag = "Guests",
    security(("admin_token" = [])),
    responses(
        (status = 200, description = "All guests", body = Vec<GuestView>),
        (status = 403, description = "Unauthorized")
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GuestView>>> {
    let guests = state.guest_service.get_dashboard_stats().await?;
    Ok(Json(guests))
}
