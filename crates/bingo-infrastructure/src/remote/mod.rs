mod firestore;
mod offline;

pub use firestore::{FirestoreClient, FirestoreConfig, FirestoreError, RetryConfig};
pub use offline::OfflineRemoteStore;
