//! HTTP request handlers.

pub mod admin_handler;
pub mod guest_handler;

pub use admin_handler::admin_routes;
pub use guest_handler::guest_routes;
