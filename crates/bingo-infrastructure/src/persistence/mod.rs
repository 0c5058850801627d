mod database;
mod kv_store;
mod memory_store;
mod repository_base;

pub use database::Database;
pub use kv_store::SqliteKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use repository_base::SqliteRepositoryBase;
