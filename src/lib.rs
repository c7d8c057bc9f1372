//! PG Manager - Paying-guest hostel management API
//!
//! An administrator logs in with a shared token, then admits guests into
//! rooms of fixed capacity, looks them up, removes them and records their
//! payment status.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Rooms, guests, admins and their JSON projections
//! - **services**: Authentication and guest use cases
//! - **infra**: Database, repositories and unit of work
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create rooms and the admin account
//! cargo run -- seed --room 101 --room 102 --admin-email admin@x --admin-password pw
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Admin, Guest, GuestInput, GuestView, Room, RoomView};
pub use errors::{AppError, AppResult};
