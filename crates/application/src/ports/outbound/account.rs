//! Identity store port.

use std::sync::Arc;

use async_trait::async_trait;
use domain::identity::{Account, NewAccount};

use crate::error::StoreError;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Port for account persistence, keyed by provider identifiers.
///
/// Blank identifiers are never subject to the uniqueness constraint. A blank
/// lookup matches accounts without that identifier, lowest id first.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Persist a new account and assign its id.
    async fn create(&self, account: NewAccount) -> StoreResult<Account>;

    /// Find an account by Google identifier.
    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Account>;

    /// Find an account by Facebook identifier.
    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> StoreResult<Account>;
}

#[async_trait]
impl<T> IdentityStore for Arc<T>
where
    T: IdentityStore + ?Sized,
{
    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        (**self).create(account).await
    }

    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Account> {
        (**self).find_by_google_id(google_id).await
    }

    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> StoreResult<Account> {
        (**self).find_by_facebook_id(facebook_id).await
    }
}
