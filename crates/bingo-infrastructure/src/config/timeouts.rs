use std::time::Duration;

/// Configuration for various timeout durations across the application
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Whole-request timeout for remote document calls
    pub http_request: Duration,

    /// TCP/TLS connect timeout for remote document calls
    pub http_connect: Duration,

    /// Waiting for a pooled SQLite connection
    pub db_acquire: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

/// Global timeout configuration instance
static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    http_request: Duration::from_secs(15),
    http_connect: Duration::from_secs(5),
    db_acquire: Duration::from_secs(10),
};
