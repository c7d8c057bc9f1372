//! Authentication service - Admin login and shared-token validation.
//!
//! A successful login hands out the process-wide shared token configured
//! at startup. Holding that token is the only authorization check: there
//! is no per-session state, no expiry and no refresh.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Return the shared token if an admin holds exactly this credential pair
    async fn login(&self, email: String, password: String) -> AppResult<String>;

    /// True iff `presented` equals the shared token byte-for-byte
    fn validate_token(&self, presented: &str) -> bool;

    /// Tokens are stateless, so logging out always succeeds
    fn logout(&self, presented: &str);
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    token: String,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: &Config) -> Self {
        Self {
            uow,
            token: config.admin_token().to_string(),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, email: String, password: String) -> AppResult<String> {
        let admin = self
            .uow
            .admins()
            .find_by_email_and_password(&email, &password)
            .await?;

        match admin {
            Some(admin) => {
                tracing::info!(admin_id = admin.id, "Admin logged in");
                Ok(self.token.clone())
            }
            None => {
                tracing::warn!(email = %email, "Rejected admin login");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn validate_token(&self, presented: &str) -> bool {
        presented.as_bytes() == self.token.as_bytes()
    }

    fn logout(&self, _presented: &str) {
        tracing::debug!("Admin logged out");
    }
}
