//! Guest repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::guest::{self, ActiveModel, Entity as GuestEntity};
use crate::domain::{Guest, NewGuest};
use crate::errors::{AppError, AppResult, Resource};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Guest repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Find guest by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>>;

    /// List all guests
    async fn find_all(&self) -> AppResult<Vec<Guest>>;

    /// Count the guests currently assigned to a room
    async fn count_by_room(&self, room_number: i32) -> AppResult<u64>;

    /// Save an existing guest in place
    async fn update(&self, guest: Guest) -> AppResult<Guest>;

    /// Delete guest by ID
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of GuestRepository
pub struct GuestStore {
    db: DatabaseConnection,
}

impl GuestStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GuestRepository for GuestStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>> {
        let result = GuestEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Guest::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Guest>> {
        let models = GuestEntity::find()
            .order_by_asc(guest::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Guest::from).collect())
    }

    async fn count_by_room(&self, room_number: i32) -> AppResult<u64> {
        GuestEntity::find()
            .filter(guest::Column::RoomId.eq(room_number))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, guest: Guest) -> AppResult<Guest> {
        let existing = GuestEntity::find_by_id(guest.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound(Resource::Guest))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(guest.name);
        active.email = Set(guest.email);
        active.phone = Set(guest.phone);
        active.payment_status = Set(guest.payment_status);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Guest::from(model))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let result = GuestEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(Resource::Guest));
        }

        Ok(())
    }
}

impl From<NewGuest> for ActiveModel {
    fn from(guest: NewGuest) -> Self {
        ActiveModel {
            name: Set(guest.name),
            email: Set(guest.email),
            phone: Set(guest.phone),
            admit_date: Set(Some(guest.admit_date)),
            payment_status: Set(guest.payment_status),
            room_id: Set(guest.room_number),
            ..Default::default()
        }
    }
}
