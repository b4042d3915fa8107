//! Data Transfer Objects for the application layer.
//!
//! DTOs are used to transfer data between layers without exposing domain
//! entities.

use domain::identity::{Account, AccountId};
use serde::{Deserialize, Serialize};

/// Federated credential submitted on sign-up and login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Subject identifier issued by Google.
    #[serde(default)]
    pub google_id: Option<String>,
    /// User identifier issued by Facebook.
    #[serde(default)]
    pub facebook_id: Option<String>,
}

impl Credential {
    /// Creates a new [`Credential`].
    pub fn new(google_id: Option<&str>, facebook_id: Option<&str>) -> Self {
        Self {
            google_id: google_id.map(str::to_owned),
            facebook_id: facebook_id.map(str::to_owned),
        }
    }
}

/// Response DTO for sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: AccountId,
    pub google_id: Option<String>,
    pub facebook_id: Option<String>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            google_id: account.google_id,
            facebook_id: account.facebook_id,
        }
    }
}

/// Response DTO for login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Token type (e.g., "Bearer").
    pub token_type: String,
    /// Signed session token.
    pub token: String,
    /// Expiration time in seconds.
    pub expires_in: u64,
}
