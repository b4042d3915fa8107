//! Outbound adapters.

pub mod clock;
pub mod jwt;
pub mod persistence;
pub mod telemetry;
pub mod validator;
