use async_trait::async_trait;

use crate::shared::DomainError;

/// Device-local string store.
///
/// Values are opaque strings; callers own their encoding (JSON documents,
/// integers, `YYYY-MM-DD` dates).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Insert or overwrite
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
