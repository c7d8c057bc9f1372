//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Centralizes access to all repositories
//! - Manages database transactions (begin, commit, rollback)
//! - Provides atomic operations for workflows spanning several reads and writes

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::guest::{
    self, ActiveModel as GuestActiveModel, Entity as GuestEntity,
};
use super::repositories::entities::room::Entity as RoomEntity;
use super::repositories::{
    AdminRepository, AdminStore, GuestRepository, GuestStore, RoomRepository, RoomStore,
};
use crate::domain::{Guest, NewGuest};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock at the repository level or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get admin repository
    fn admins(&self) -> Arc<dyn AdminRepository>;

    /// Get room repository
    fn rooms(&self) -> Arc<dyn RoomRepository>;

    /// Get guest repository
    fn guests(&self) -> Arc<dyn GuestRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get room repository for this transaction
    pub fn rooms(&self) -> TxRoomRepository<'_> {
        TxRoomRepository::new(self.txn)
    }

    /// Get guest repository for this transaction
    pub fn guests(&self) -> TxGuestRepository<'_> {
        TxGuestRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    admin_repo: Arc<AdminStore>,
    room_repo: Arc<RoomStore>,
    guest_repo: Arc<GuestStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            admin_repo: Arc::new(AdminStore::new(db.clone())),
            room_repo: Arc::new(RoomStore::new(db.clone())),
            guest_repo: Arc::new(GuestStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn admins(&self) -> Arc<dyn AdminRepository> {
        self.admin_repo.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomRepository> {
        self.room_repo.clone()
    }

    fn guests(&self) -> Arc<dyn GuestRepository> {
        self.guest_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware room repository.
pub struct TxRoomRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxRoomRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Lock the room row until the transaction ends.
    ///
    /// Returns false when the room does not exist. Backends without row
    /// locks (SQLite) already serialize writers.
    pub async fn lock(&self, room_number: i32) -> AppResult<bool> {
        let room = RoomEntity::find_by_id(room_number)
            .lock_exclusive()
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(room.is_some())
    }
}

/// Transaction-aware guest repository.
pub struct TxGuestRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxGuestRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Count the guests currently assigned to a room
    pub async fn count_by_room(&self, room_number: i32) -> AppResult<u64> {
        GuestEntity::find()
            .filter(guest::Column::RoomId.eq(room_number))
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Insert a new guest
    pub async fn create(&self, guest: NewGuest) -> AppResult<Guest> {
        let model = GuestActiveModel::from(guest)
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(Guest::from(model))
    }
}
