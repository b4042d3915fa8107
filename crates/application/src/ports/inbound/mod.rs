//! These traits define what the application can do.

pub mod auth;

pub use auth::*;
