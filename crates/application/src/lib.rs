//! Application layer: sign-up and login use cases and the ports they need.

#![forbid(unsafe_code)]

pub mod dto;
pub mod error;
pub mod ports;
pub mod usecases;
