use bingo_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;

/// Shared plumbing for SQLite repositories: runs a query and maps driver
/// errors to `DomainError::Repository` tagged with the operation name.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the number of affected rows
    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<u64, DomainError> {
        query
            .execute(self.pool())
            .await
            .map(|result| result.rows_affected())
            .map_err(|e| DomainError::Repository(format!("{}: {}", operation, e)))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        query
            .fetch_optional(self.pool())
            .await
            .map_err(|e| DomainError::Repository(format!("{}: {}", operation, e)))
    }
}
