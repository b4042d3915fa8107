//! Inbound ports are what the application offers, outbound ports are what it
//! needs.

pub mod inbound;
pub mod outbound;
