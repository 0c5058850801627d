use bingo_domain::shared::DomainError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const USERS_COLLECTION: &str = "users";

/// Where the user documents live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirestoreConfig {
    pub project_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_collection() -> String {
    USERS_COLLECTION.to_string()
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: default_base_url(),
            database: default_database(),
            collection: default_collection(),
        }
    }

    /// Point at a local emulator or proxy, e.g. `http://localhost:8080/v1`
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// HTTP retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (default: 2)
    pub max_retries: u32,
    /// Initial backoff duration in milliseconds (default: 500ms)
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds (default: 4000ms)
    pub max_backoff_ms: u64,
    /// Backoff multiplier (default: 2.0 for exponential backoff)
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff_ms: 500,
            max_backoff_ms: 4000,
            backoff_multiplier: 2.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FirestoreError {
    #[error("Document not found")]
    NotFound,

    #[error("Firestore returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid Firestore payload: {0}")]
    Decode(String),

    #[error("Invalid Firestore URL: {0}")]
    Url(String),
}

impl FirestoreError {
    /// Network failures, 5xx and 429 are worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            FirestoreError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            FirestoreError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<url::ParseError> for FirestoreError {
    fn from(e: url::ParseError) -> Self {
        FirestoreError::Url(e.to_string())
    }
}

impl From<FirestoreError> for DomainError {
    fn from(e: FirestoreError) -> Self {
        match e {
            FirestoreError::NotFound => DomainError::NotFound("Remote document".to_string()),
            FirestoreError::Decode(msg) => DomainError::Deserialization(msg),
            other => DomainError::Remote(other.to_string()),
        }
    }
}
