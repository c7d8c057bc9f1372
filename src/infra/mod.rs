//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{is_write_conflict, Database, Migrator};
pub use repositories::{
    AdminRepository, AdminStore, GuestRepository, GuestStore, RoomRepository, RoomStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxGuestRepository, TxRoomRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAdminRepository, MockGuestRepository, MockRoomRepository};
