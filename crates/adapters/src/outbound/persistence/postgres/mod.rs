//! PostgreSQL identity store.

mod account_repository;
mod models;

pub use account_repository::PgIdentityStore;

use sqlx::migrate::Migrator;

/// Schema migrations, run on start-up.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
