//! Account domain entity.

use serde::{Deserialize, Serialize};

use super::id::AccountId;

/// Durable identity record.
///
/// Only the store builds an [`Account`]: the id comes from persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub google_id: Option<String>,
    pub facebook_id: Option<String>,
}

/// Account waiting for its id, handed to the store on sign-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewAccount {
    pub google_id: Option<String>,
    pub facebook_id: Option<String>,
}

impl NewAccount {
    /// Creates a new [`NewAccount`] from provider identifiers.
    pub fn new(google_id: Option<String>, facebook_id: Option<String>) -> Self {
        Self {
            google_id,
            facebook_id,
        }
    }

    /// Finalizes the record once the store assigned an id.
    pub fn persisted(self, id: AccountId) -> Account {
        Account {
            id,
            google_id: self.google_id,
            facebook_id: self.facebook_id,
        }
    }
}

/// Returns the identifier only when it carries a value.
///
/// An identifier made only of Unicode `White_Space` characters is blank.
/// Stores treat blank identifiers as "not linked": they are never unique, and
/// a blank lookup matches the accounts without that identifier.
pub fn present(identifier: Option<&str>) -> Option<&str> {
    identifier.filter(|id| !id.chars().all(char::is_whitespace))
}
