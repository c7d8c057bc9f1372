//! OpenAPI documentation configuration.
//!
//! The document is served as JSON at `/api-docs/openapi.json`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{admin_handler, guest_handler};
use crate::domain::{GuestInput, GuestSummary, GuestView, RoomView};

/// OpenAPI documentation for the PG manager API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PG Manager API",
        version = "0.1.0",
        description = "Paying-guest hostel management: rooms, guests and payment status",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Admin endpoints
        admin_handler::login,
        admin_handler::logout,
        admin_handler::validate_token,
        // Guest endpoints
        guest_handler::add_guest,
        guest_handler::get_all_guests,
        guest_handler::get_guests_by_room,
        guest_handler::get_guest_by_id,
        guest_handler::update_guest,
        guest_handler::delete_guest,
        guest_handler::get_available_rooms,
        guest_handler::update_payment_status,
        guest_handler::get_dashboard_stats,
    ),
    components(
        schemas(
            // Projections
            GuestView,
            GuestSummary,
            RoomView,
            // Request bodies
            GuestInput,
            admin_handler::LoginRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admin", description = "Admin login and token checks"),
        (name = "Guests", description = "Guest records, rooms and payment status")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the shared admin token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Admin token returned by /api/admin/login, sent without a scheme prefix",
                ))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_guest_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/guests/add"));
        assert!(doc.paths.paths.contains_key("/api/guests/{id}/payment-status"));
        assert!(doc.paths.paths.contains_key("/api/admin/login"));
    }

    #[test]
    fn test_update_route_documents_not_found_text() {
        let doc = ApiDoc::openapi();
        let item = &doc.paths.paths["/api/guests/update/{id}"];
        let operation = &item.operations[&utoipa::openapi::PathItemType::Put];

        let description = operation.description.as_deref().unwrap_or_default();
        assert!(description.contains("Guest not found"));
    }

    #[test]
    fn test_document_declares_token_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("admin_token"));
    }
}
