//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! hostel concepts independent of infrastructure concerns.
//!
//! The Room -> Guests -> Room graph is cyclic; guests refer back to their
//! room by number only, and the transport projections in [`projection`]
//! never nest a room inside a guest.

pub mod admin;
pub mod guest;
pub mod projection;
pub mod room;

pub use admin::Admin;
pub use guest::{Guest, GuestInput, NewGuest};
pub use projection::{GuestSummary, GuestView, RoomView};
pub use room::Room;
