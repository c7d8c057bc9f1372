//! API middleware.

mod auth;

pub use auth::{presented_token, token_middleware};
