//! Unit-of-work double backed by mocked repositories.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    AdminRepository, GuestRepository, MockAdminRepository, MockGuestRepository,
    MockRoomRepository, RoomRepository, TransactionContext, UnitOfWork,
};

/// Test mock for UnitOfWork that wraps mocked repositories
pub struct TestUnitOfWork {
    admin_repo: Arc<MockAdminRepository>,
    room_repo: Arc<MockRoomRepository>,
    guest_repo: Arc<MockGuestRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            admin_repo: Arc::new(MockAdminRepository::new()),
            room_repo: Arc::new(MockRoomRepository::new()),
            guest_repo: Arc::new(MockGuestRepository::new()),
        }
    }
}

impl TestUnitOfWork {
    pub fn with_admins(mut self, repo: MockAdminRepository) -> Self {
        self.admin_repo = Arc::new(repo);
        self
    }

    pub fn with_rooms(mut self, repo: MockRoomRepository) -> Self {
        self.room_repo = Arc::new(repo);
        self
    }

    pub fn with_guests(mut self, repo: MockGuestRepository) -> Self {
        self.guest_repo = Arc::new(repo);
        self
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn admins(&self) -> Arc<dyn AdminRepository> {
        self.admin_repo.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomRepository> {
        self.room_repo.clone()
    }

    fn guests(&self) -> Arc<dyn GuestRepository> {
        self.guest_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Transactions need a real connection; covered by integration tests
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
