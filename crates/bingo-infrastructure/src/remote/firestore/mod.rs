//! Firestore REST client for the per-user score documents.

mod documents;
mod queries;
mod types;
mod values;

pub use types::{FirestoreConfig, FirestoreError, RetryConfig};

use async_trait::async_trait;
use bingo_domain::remote::RemoteCredentials;
use log::{debug, warn};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;
use url::Url;

use crate::config::TimeoutConfig;

pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
    retry_config: RetryConfig,
    id_token: RwLock<Option<String>>,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Result<Self, FirestoreError> {
        Self::with_retry_config(config, RetryConfig::default())
    }

    pub fn with_retry_config(
        config: FirestoreConfig,
        retry_config: RetryConfig,
    ) -> Result<Self, FirestoreError> {
        let timeouts = TimeoutConfig::global();
        let client = Client::builder()
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.http_connect)
            .build()?;

        // Fail early on a base URL that can never work
        Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            config,
            retry_config,
            id_token: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    /// `{base}/projects/{project}/databases/{database}/documents/{collection}/{id}`
    pub(super) fn document_url(&self, document_id: &str) -> Result<Url, FirestoreError> {
        self.build_url(&[
            "projects",
            &self.config.project_id,
            "databases",
            &self.config.database,
            "documents",
            &self.config.collection,
            document_id,
        ])
    }

    /// `{base}/projects/{project}/databases/{database}/documents:{method}`
    pub(super) fn documents_method_url(&self, method: &str) -> Result<Url, FirestoreError> {
        let last = format!("documents:{method}");
        self.build_url(&[
            "projects",
            &self.config.project_id,
            "databases",
            &self.config.database,
            &last,
        ])
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, FirestoreError> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.path_segments_mut()
            .map_err(|_| FirestoreError::Url(format!("{} cannot be a base", self.config.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request and decode the JSON body
    pub(super) async fn request_json(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<Value, FirestoreError> {
        let token = self.id_token.read().await.clone();

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("[firestore] {} {}", method, url.path());
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FirestoreError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FirestoreError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Execute a request with retry logic
    ///
    /// Retries on:
    /// - Network errors (connection failures, timeouts)
    /// - 5xx server errors
    /// - 429 Too Many Requests
    pub(super) async fn execute_with_retry<F, Fut, T>(
        &self,
        operation_name: &str,
        mut request_fn: F,
    ) -> Result<T, FirestoreError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, FirestoreError>>,
    {
        let mut attempt = 0;
        let mut backoff_ms = self.retry_config.initial_backoff_ms;

        loop {
            attempt += 1;

            match request_fn().await {
                Ok(response) => {
                    if attempt > 1 {
                        debug!("{} succeeded after {} attempts", operation_name, attempt);
                    }
                    return Ok(response);
                }
                Err(e) => {
                    let should_retry =
                        attempt <= self.retry_config.max_retries && e.is_retryable();

                    if !should_retry {
                        if attempt > self.retry_config.max_retries {
                            warn!(
                                "{} failed after {} attempts",
                                operation_name, attempt
                            );
                        }
                        return Err(e);
                    }

                    warn!(
                        "{} failed (attempt {}/{}): {}. Retrying in {}ms...",
                        operation_name, attempt, self.retry_config.max_retries, e, backoff_ms
                    );
                    sleep(Duration::from_millis(backoff_ms)).await;

                    backoff_ms = ((backoff_ms as f64 * self.retry_config.backoff_multiplier)
                        as u64)
                        .min(self.retry_config.max_backoff_ms);
                }
            }
        }
    }
}

/// Bearer token from the identity provider; `None` sends anonymous requests
#[async_trait]
impl RemoteCredentials for FirestoreClient {
    async fn set_id_token(&self, token: Option<String>) {
        *self.id_token.write().await = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn client() -> FirestoreClient {
        FirestoreClient::with_retry_config(
            FirestoreConfig::new("daily-bingo"),
            RetryConfig {
                max_retries: 2,
                initial_backoff_ms: 1,
                max_backoff_ms: 2,
                backoff_multiplier: 2.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_document_url() {
        let url = client().document_url("user-42").unwrap();
        assert_eq!(
            url.as_str(),
            "https://firestore.googleapis.com/v1/projects/daily-bingo/databases/(default)/documents/users/user-42"
        );
    }

    #[test]
    fn test_document_url_escapes_ids() {
        let url = client().document_url("a/b").unwrap();
        assert!(url.path().ends_with("/users/a%2Fb"));
    }

    #[test]
    fn test_method_url_with_trailing_slash_base() {
        let client = FirestoreClient::new(
            FirestoreConfig::new("p").with_base_url("http://localhost:8080/v1/"),
        )
        .unwrap();
        let url = client.documents_method_url("runQuery").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v1/projects/p/databases/(default)/documents:runQuery"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = FirestoreClient::new(FirestoreConfig::new("p").with_base_url("not a url"));
        assert!(matches!(result, Err(FirestoreError::Url(_))));
    }

    #[tokio::test]
    async fn test_retry_stops_on_client_errors() {
        let client = client();
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<(), _> = client
            .execute_with_retry("op", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(FirestoreError::Status {
                    status: 403,
                    message: "denied".to_string(),
                })
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_from_server_errors() {
        let client = client();
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result = client
            .execute_with_retry("op", move || async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(FirestoreError::Status {
                        status: 503,
                        message: "unavailable".to_string(),
                    })
                } else {
                    Ok(7)
                }
            })
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_retries() {
        let client = client();
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<(), _> = client
            .execute_with_retry("op", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(FirestoreError::Status {
                    status: 500,
                    message: "boom".to_string(),
                })
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
