//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use axum::http::HeaderValue;
use std::sync::Arc;

use crate::config::{Config, DEFAULT_CORS_ALLOWED_ORIGIN};
use crate::infra::Database;
use crate::services::{AuthService, GuestService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Guest service
    pub guest_service: Arc<dyn GuestService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Origin allowed to make cross-origin requests
    pub cors_origin: HeaderValue,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            guest_service: container.guests(),
            database,
            cors_origin: parse_origin(&config.cors_allowed_origin),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        guest_service: Arc<dyn GuestService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            guest_service,
            database,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ALLOWED_ORIGIN),
        }
    }
}

fn parse_origin(origin: &str) -> HeaderValue {
    HeaderValue::from_str(origin).unwrap_or_else(|_| {
        tracing::warn!(origin, "Invalid CORS origin, falling back to default");
        HeaderValue::from_static(DEFAULT_CORS_ALLOWED_ORIGIN)
    })
}
