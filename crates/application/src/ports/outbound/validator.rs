//! Credential validator port.

use crate::dto::Credential;
use crate::error::ValidationError;

/// Port checking the shape of a credential.
pub trait CredentialValidator: Send + Sync {
    /// Returns `Err` when the credential misses both identifiers or when an
    /// identifier is malformed.
    fn validate(&self, credential: &Credential) -> Result<(), ValidationError>;
}
