//! Core entities of the federated account system.
//!
//! Nothing here performs I/O: accounts are created and looked up through the
//! ports declared by the `application` crate.

#![forbid(unsafe_code)]

pub mod error;
pub mod identity;
