//! Interface for session token operations.

use domain::identity::AccountId;
use serde::{Deserialize, Serialize};

use crate::error::SigningError;

/// Claims contained in a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub account_id: AccountId,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

/// Port for token signing.
pub trait TokenSigner: Send + Sync {
    /// Create a compact signed token from claims.
    fn sign(&self, claims: &SessionClaims) -> Result<String, SigningError>;
}
