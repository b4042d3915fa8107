//! Authentication use case port.

use async_trait::async_trait;

use crate::dto::{AccountView, Credential, LoginResponse};
use crate::error::Result;

/// Inbound port for federated sign-up and login.
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Register a new account carrying the credential's identifiers.
    async fn sign_up(&self, credential: Credential) -> Result<AccountView>;

    /// Issue a session token for an existing account.
    async fn login(&self, credential: Credential) -> Result<LoginResponse>;
}
