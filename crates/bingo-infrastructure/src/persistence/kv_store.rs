use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::SqliteRepositoryBase;
use bingo_domain::shared::DomainError;
use bingo_domain::storage::KeyValueStore;

pub struct SqliteKeyValueStore {
    base: SqliteRepositoryBase,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let query = "SELECT value FROM kv_store WHERE key = ?1";

        let row: Option<(String,)> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(key), "Get cached value")
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
        "#;

        self.base
            .execute(
                sqlx::query(query).bind(key).bind(value).bind(Utc::now()),
                "Set cached value",
            )
            .await?;

        debug!("[kv] set key={} bytes={}", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let removed = self
            .base
            .execute(
                sqlx::query("DELETE FROM kv_store WHERE key = ?1").bind(key),
                "Remove cached value",
            )
            .await?;

        debug!("[kv] remove key={} removed={}", key, removed);
        Ok(())
    }
}
