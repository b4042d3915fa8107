//! In-memory identity store, used when no database is configured.

use application::error::{StoreError, ToUnavailable};
use application::ports::outbound::{IdentityStore, StoreResult};
use async_trait::async_trait;
use domain::identity::{Account, AccountId, NewAccount, present};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Accounts {
    last_id: i64,
    records: Vec<Account>,
}

impl Accounts {
    /// First account, in creation order, whose identifier equals
    /// `identifier`. A blank lookup matches accounts without that identifier.
    fn find<F>(&self, identifier: &str, field: F) -> StoreResult<Account>
    where
        F: Fn(&Account) -> Option<&str>,
    {
        let identifier = present(Some(identifier));

        self.records
            .iter()
            .find(|account| present(field(account)) == identifier)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn is_taken<F>(&self, identifier: Option<&str>, field: F) -> bool
    where
        F: Fn(&Account) -> Option<&str>,
    {
        present(identifier).is_some_and(|id| self.find(id, field).is_ok())
    }
}

/// Process-local store. Content is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    accounts: RwLock<Accounts>,
}

impl InMemoryIdentityStore {
    /// Create a new, empty [`InMemoryIdentityStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.records.len()
    }

    /// Whether no account was created yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.is_taken(account.google_id.as_deref(), |a| a.google_id.as_deref()) {
            return Err(StoreError::Conflict {
                field: "google_id".into(),
            });
        }
        if accounts.is_taken(account.facebook_id.as_deref(), |a| {
            a.facebook_id.as_deref()
        }) {
            return Err(StoreError::Conflict {
                field: "facebook_id".into(),
            });
        }

        let id = AccountId::new(accounts.last_id + 1).catch()?;
        accounts.last_id = id.get();

        let account = account.persisted(id);
        accounts.records.push(account.clone());

        Ok(account)
    }

    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Account> {
        self.accounts
            .read()
            .await
            .find(google_id, |a| a.google_id.as_deref())
    }

    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> StoreResult<Account> {
        self.accounts
            .read()
            .await
            .find(facebook_id, |a| a.facebook_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(google: Option<&str>, facebook: Option<&str>) -> NewAccount {
        NewAccount::new(google.map(str::to_owned), facebook.map(str::to_owned))
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryIdentityStore::new();

        let first = store.create(new_account(Some("g1"), None)).await.unwrap();
        let second = store.create(new_account(None, Some("f2"))).await.unwrap();

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicated_identifier() {
        let store = InMemoryIdentityStore::new();
        store.create(new_account(Some("g1"), Some("f1"))).await.unwrap();

        let err = store
            .create(new_account(Some("g2"), Some("f1")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { ref field } if field == "facebook_id"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_blank_identifiers_are_not_unique() {
        let store = InMemoryIdentityStore::new();

        store.create(new_account(Some("g1"), Some(""))).await.unwrap();
        store.create(new_account(Some("g2"), Some(""))).await.unwrap();

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find() {
        let store = InMemoryIdentityStore::new();
        let created = store
            .create(new_account(Some("g1"), Some("f1")))
            .await
            .unwrap();

        assert_eq!(store.find_by_google_id("g1").await.unwrap(), created);
        assert_eq!(store.find_by_facebook_id("f1").await.unwrap(), created);
        assert!(matches!(
            store.find_by_google_id("f1").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_blank_identifier_matches_first_unlinked_account() {
        let store = InMemoryIdentityStore::new();
        store.create(new_account(Some("g1"), Some("f1"))).await.unwrap();
        let first = store.create(new_account(Some("g2"), Some(""))).await.unwrap();
        store.create(new_account(Some("g3"), None)).await.unwrap();

        assert_eq!(store.find_by_facebook_id("").await.unwrap(), first);
        assert_eq!(store.find_by_facebook_id("  ").await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_blank_identifier_without_unlinked_account() {
        let store = InMemoryIdentityStore::new();
        store.create(new_account(Some("g1"), Some("f1"))).await.unwrap();

        assert!(matches!(
            store.find_by_facebook_id("").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_unicode_whitespace_is_blank() {
        let store = InMemoryIdentityStore::new();
        let first = store
            .create(new_account(Some("g1"), Some("\t\u{a0}")))
            .await
            .unwrap();
        store.create(new_account(Some("g2"), Some("\u{3000}"))).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(store.find_by_facebook_id("\n").await.unwrap(), first);
    }
}
