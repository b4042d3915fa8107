//! PostgreSQL implementation for identity store.

use application::error::{StoreError, ToUnavailable};
use application::ports::outbound::{IdentityStore, StoreResult};
use async_trait::async_trait;
use domain::identity::{Account, NewAccount, present};
use sqlx::PgPool;

use super::models::AccountRecord;

/// Maps an insertion failure, turning unique violations into conflicts.
fn insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let field = match db.constraint() {
                Some(c) if c.contains("facebook") => "facebook_id",
                _ => "google_id",
            };
            return StoreError::Conflict {
                field: field.into(),
            };
        }
    }

    StoreError::unavailable(err)
}

/// PostgreSQL identity store.
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    /// Create a new [`PgIdentityStore`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs a lookup query taking the identifier as `$1`, or `NULL` when it
    /// is blank so that it matches accounts without that identifier.
    async fn find_one(&self, query: &str, identifier: &str) -> StoreResult<Account> {
        sqlx::query_as::<_, AccountRecord>(query)
            .bind(present(Some(identifier)))
            .fetch_optional(&self.pool)
            .await
            .catch()?
            .ok_or(StoreError::NotFound)?
            .try_into_account()
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (google_id, facebook_id)
            VALUES ($1, $2)
            RETURNING id, google_id, facebook_id, created_at
            "#,
        )
        .bind(&account.google_id)
        .bind(&account.facebook_id)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?
        .try_into_account()
    }

    async fn find_by_google_id(&self, google_id: &str) -> StoreResult<Account> {
        self.find_one(
            r#"
            SELECT id, google_id, facebook_id, created_at
            FROM accounts
            WHERE CASE
                WHEN $1::TEXT IS NULL THEN NOT coalesce(identifier_is_present(google_id), FALSE)
                ELSE google_id = $1
            END
            ORDER BY id
            LIMIT 1
            "#,
            google_id,
        )
        .await
    }

    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> StoreResult<Account> {
        self.find_one(
            r#"
            SELECT id, google_id, facebook_id, created_at
            FROM accounts
            WHERE CASE
                WHEN $1::TEXT IS NULL THEN NOT coalesce(identifier_is_present(facebook_id), FALSE)
                ELSE facebook_id = $1
            END
            ORDER BY id
            LIMIT 1
            "#,
            facebook_id,
        )
        .await
    }
}
