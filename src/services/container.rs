//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work and hands them out
//! behind their traits.

use std::sync::Arc;

use super::{AuthService, GuestService};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get guest service
    fn guests(&self) -> Arc<dyn GuestService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    guest_service: Arc<dyn GuestService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        use super::{Authenticator, GuestManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let guest_service = Arc::new(GuestManager::new(uow));

        Self {
            auth_service,
            guest_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn guests(&self) -> Arc<dyn GuestService> {
        self.guest_service.clone()
    }
}
