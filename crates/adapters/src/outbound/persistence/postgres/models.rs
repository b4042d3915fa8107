//! Database models for PostgreSQL.

use application::error::{StoreError, ToUnavailable};
use chrono::{DateTime, Utc};
use domain::identity::{Account, AccountId};
use sqlx::FromRow;

/// Account record as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub id: i64,
    pub google_id: Option<String>,
    pub facebook_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AccountRecord {
    /// Convert to [`Account`].
    pub fn try_into_account(self) -> Result<Account, StoreError> {
        tracing::trace!(id = self.id, created_at = %self.created_at, "account record loaded");

        Ok(Account {
            id: AccountId::new(self.id).catch()?,
            google_id: self.google_id,
            facebook_id: self.facebook_id,
        })
    }
}
