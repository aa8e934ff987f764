use crate::domain::contact::ContactMessage;
use crate::storage::{ContactStore, DbPool, StoreError};
use async_trait::async_trait;

/// Postgres-backed contact store. Records land in `contact_messages` with a
/// database-assigned id.
#[derive(Clone, Debug)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn append(&self, message: &ContactMessage) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, message, submitted_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
