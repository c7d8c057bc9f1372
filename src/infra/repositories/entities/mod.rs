//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin;
pub mod guest;
pub mod room;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use admin::{Entity as AdminEntity, Model as AdminModel};
#[allow(unused_imports)]
pub use guest::{ActiveModel as GuestActiveModel, Entity as GuestEntity, Model as GuestModel};
#[allow(unused_imports)]
pub use room::{Entity as RoomEntity, Model as RoomModel};
