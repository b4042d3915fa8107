//! Identity of an account: its internal id and provider identifiers.

pub mod account;
pub mod id;

pub use account::*;
pub use id::*;
