use crate::domain::contact::ContactMessage;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use thiserror::Error;

pub mod contact_repo;

pub type DbPool = Pool<Postgres>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Handle to the append-only collection of contact messages.
///
/// Injected into the submission service so the remote store stays an
/// explicit dependency rather than a global.
#[async_trait]
pub trait ContactStore: Send + Sync + std::fmt::Debug {
    /// Appends one message. The store assigns the record identifier.
    ///
    /// # Errors
    /// Returns `StoreError` if the write does not complete; nothing is
    /// appended in that case.
    async fn append(&self, message: &ContactMessage) -> Result<(), StoreError>;

    /// Probes store connectivity for the readiness check.
    ///
    /// # Errors
    /// Returns `StoreError` if the store is unreachable.
    async fn check(&self) -> Result<(), StoreError>;
}

/// Initializes the database connection pool.
///
/// # Errors
/// Returns `sqlx::Error` if the connection fails.
pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(database_url).await
}
