//! Application services implementing business logic.

pub const TOKEN_TYPE: &str = "Bearer";
/// Session lifetime: 12 hours, no refresh token.
pub const SESSION_LIFETIME: u64 = 60 * 60 * 12;

pub mod auth;

pub use auth::*;
