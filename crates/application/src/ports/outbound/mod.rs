//! These traits define what the application needs from the outside world.

pub mod account;
pub mod clock;
pub mod telemetry;
pub mod token;
pub mod validator;

pub use account::*;
pub use clock::*;
pub use telemetry::*;
pub use token::*;
pub use validator::*;
