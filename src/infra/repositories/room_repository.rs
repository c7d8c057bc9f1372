//! Room repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::guest::Entity as GuestEntity;
use super::entities::room::{self, ActiveModel, Entity as RoomEntity};
use crate::domain::Room;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Room repository trait for dependency injection.
///
/// Rooms are always returned with their current guests loaded.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by its number
    async fn find_by_number(&self, room_number: i32) -> AppResult<Option<Room>>;

    /// List every room holding fewer guests than its capacity
    async fn find_available(&self) -> AppResult<Vec<Room>>;

    /// Create an empty room
    async fn create(&self, room_number: i32) -> AppResult<Room>;
}

/// Concrete implementation of RoomRepository
pub struct RoomStore {
    db: DatabaseConnection,
}

impl RoomStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for RoomStore {
    async fn find_by_number(&self, room_number: i32) -> AppResult<Option<Room>> {
        let result = RoomEntity::find_by_id(room_number)
            .find_with_related(GuestEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.into_iter().next().map(Room::from))
    }

    async fn find_available(&self) -> AppResult<Vec<Room>> {
        let rooms = RoomEntity::find()
            .order_by_asc(room::Column::RoomNumber)
            .find_with_related(GuestEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rooms
            .into_iter()
            .map(Room::from)
            .filter(Room::has_vacancy)
            .collect())
    }

    async fn create(&self, room_number: i32) -> AppResult<Room> {
        let active_model = ActiveModel {
            room_number: Set(room_number),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Room::new(model.room_number))
    }
}
