//! Device-local cache: key names and a typed facade over the key-value store.

pub mod keys;
mod local_cache;

pub use local_cache::LocalCache;
