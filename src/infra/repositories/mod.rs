//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod admin_repository;
pub(crate) mod entities;
mod guest_repository;
mod room_repository;

pub use admin_repository::{AdminRepository, AdminStore};
pub use guest_repository::{GuestRepository, GuestStore};
pub use room_repository::{RoomRepository, RoomStore};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use admin_repository::MockAdminRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use guest_repository::MockGuestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use room_repository::MockRoomRepository;
