//! Admin repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use super::entities::admin::{self, ActiveModel, Entity as AdminEntity};
use crate::domain::Admin;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find the admin holding exactly this credential pair
    async fn find_by_email_and_password(&self, email: &str, password: &str)
        -> AppResult<Option<Admin>>;

    /// Check whether an admin with this email exists
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Create a new admin
    async fn create(&self, email: String, password: String) -> AppResult<Admin>;
}

/// Concrete implementation of AdminRepository
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminStore {
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<Admin>> {
        let result = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .filter(admin::Column::Password.eq(password))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Admin::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn create(&self, email: String, password: String) -> AppResult<Admin> {
        let active_model = ActiveModel {
            email: Set(email),
            password: Set(password),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Admin::from(model))
    }
}
