//! Integration tests for API endpoints.
//!
//! These tests drive the real router, services and repositories against
//! a seeded SQLite in-memory database.

mod common;

use axum::http::{Method, StatusCode};
use chrono::Local;
use serde_json::Value;

use common::{send, test_app, TOKEN};

const GUEST_BODY: &str = r#"{"name":"A","email":"a@x","phone":"1"}"#;

// =============================================================================
// Admin Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_login_returns_token() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(r#"{"email":"admin@x","password":"pw"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, TOKEN);

    let (status, body) = send(&app, Method::POST, "/api/admin/validate-token", Some(&body), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(r#"{"email":"admin@x","password":"wrong"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Invalid credentials");
}

#[tokio::test]
async fn test_validate_token_rejects_prefixed_token() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/validate-token",
        Some("Bearer Rashid"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "false");
}

// =============================================================================
// Authorization Tests
// =============================================================================

#[tokio::test]
async fn test_guest_routes_require_token() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/guests/all", None, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Unauthorized");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some("wrong"),
        Some(GUEST_BODY),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Nothing was admitted by the rejected request
    let (status, body) = send(&app, Method::GET, "/api/guests/all", Some(TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "No Guests Found");
}

// =============================================================================
// Guest Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_add_guest_projects_view() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let guest: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(guest["id"], 1);
    assert_eq!(guest["name"], "A");
    assert_eq!(guest["roomNumber"], 101);
    assert_eq!(guest["paymentStatus"], "pending");
    assert_eq!(
        guest["admitDate"],
        Local::now().date_naive().to_string().as_str()
    );
}

#[tokio::test]
async fn test_third_guest_is_rejected() {
    let app = test_app().await;

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/guests/add?roomNumber=101",
            Some(TOKEN),
            Some(GUEST_BODY),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Room is full");

    let (status, body) = send(&app, Method::GET, "/api/guests/101", Some(TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    let guests: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(guests.len(), 2);
}

#[tokio::test]
async fn test_mistyped_body_is_rejected_without_admitting() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some(TOKEN),
        Some(r#"{"name":5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some("not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/guests/all", Some(TOKEN), None).await;
    assert_eq!(body, "No Guests Found");
}

#[tokio::test]
async fn test_add_guest_to_unknown_room() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=999",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Room not found");
}

#[tokio::test]
async fn test_update_payment_status() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/guests/1/payment-status?month=2024-03&status=paid",
        Some(TOKEN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let guest: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(guest["paymentStatus"], "paid");
    assert_eq!(guest["roomNumber"], 101);
}

#[tokio::test]
async fn test_available_rooms_excludes_full_room() {
    let app = test_app().await;
    for _ in 0..2 {
        send(
            &app,
            Method::POST,
            "/api/guests/add?roomNumber=101",
            Some(TOKEN),
            Some(GUEST_BODY),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/guests/available-rooms",
        Some(TOKEN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rooms: Vec<Value> = serde_json::from_str(&body).unwrap();
    let numbers: Vec<i64> = rooms
        .iter()
        .map(|room| room["roomNumber"].as_i64().unwrap())
        .collect();
    assert!(numbers.contains(&102));
    assert!(!numbers.contains(&101));
}

#[tokio::test]
async fn test_available_room_nests_guests_without_room_number() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=102",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/guests/available-rooms",
        Some(TOKEN),
        None,
    )
    .await;

    let rooms: Vec<Value> = serde_json::from_str(&body).unwrap();
    let room = rooms
        .iter()
        .find(|room| room["roomNumber"] == 102)
        .unwrap();
    assert_eq!(room["guests"].as_array().unwrap().len(), 1);
    assert!(room["guests"][0]["roomNumber"].is_null());
}

#[tokio::test]
async fn test_delete_guest_then_lookup_fails() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/api/guests/1", Some(TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Guest with id : 1 deleted successfully.");

    let (status, body) = send(&app, Method::GET, "/api/guests/guest/1", Some(TOKEN), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Guest not found");

    let (status, body) = send(&app, Method::DELETE, "/api/guests/delete/1", Some(TOKEN), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Guest not found");
}

#[tokio::test]
async fn test_guests_of_unknown_room() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/guests/999", Some(TOKEN), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Room not found");
}

#[tokio::test]
async fn test_update_leaves_guest_unchanged() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/api/guests/add?roomNumber=101",
        Some(TOKEN),
        Some(GUEST_BODY),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/guests/update/1",
        Some(TOKEN),
        Some(r#"{"name":"B"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let guest: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(guest["name"], "A");
}

#[tokio::test]
async fn test_dashboard_stats_lists_guests() {
    let app = test_app().await;
    for room in [101, 102] {
        send(
            &app,
            Method::POST,
            &format!("/api/guests/add?roomNumber={}", room),
            Some(TOKEN),
            Some(GUEST_BODY),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/api/guests/dashboard/stats", Some(TOKEN), None).await;

    assert_eq!(status, StatusCode::OK);
    let guests: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(guests.len(), 2);
}

// =============================================================================
// Ambient Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_and_openapi_are_public() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/api/guests/all"].is_object());
}
