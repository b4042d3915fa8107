//! Concrete implementations of the application's outbound ports.

#![forbid(unsafe_code)]

pub mod outbound;
