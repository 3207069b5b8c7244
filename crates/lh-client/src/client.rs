//! High-level Linkhaven API client.
//!
//! [`ApiClient`] is the facade every resource operation funnels through:
//! it validates credentials, queues the call onto the client's single paced
//! lane, and settles with one normalized response or error. Each client owns
//! its queue, so independent clients in one process never share pacing
//! state.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::instrument;

use crate::config::{ClientConfig, RateLimitConfig};
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::queue::{QueueEntry, RequestQueue};
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::retry::RetryConfig;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Linkhaven API client.
///
/// # Example
///
/// ```rust,ignore
/// use linkhaven_client::{ApiClient, ApiRequest};
///
/// let client = ApiClient::new("https://links.example.com", "lk_secret")?;
/// let me = client.request(ApiRequest::get("users/me")).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
    queue: Arc<RequestQueue>,
    config: ClientConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with default configuration.
    pub fn new(instance_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::with_user_agent(&config.user_agent)?);
        Ok(Self::with_transport(
            Credentials::new(instance_url, api_key),
            transport,
            config,
        ))
    }

    /// Create a client over a custom transport.
    ///
    /// This is the seam host platforms and tests use to supply their own
    /// HTTP capability; the client depends only on [`HttpTransport`].
    pub fn with_transport(
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
        config: ClientConfig,
    ) -> Self {
        let queue = RequestQueue::new(Arc::clone(&transport));
        Self {
            credentials,
            transport,
            queue,
            config,
        }
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one API call with the client's default retry and rate-limit
    /// configuration.
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.request_with(request, None, None).await
    }

    /// Issue one API call, optionally overriding the retry or rate-limit
    /// configuration for this call only.
    ///
    /// Credentials are validated first: a malformed credential pair rejects
    /// immediately and never occupies a queue slot. The call then joins the
    /// queue and resolves once the drain task has serviced it.
    #[instrument(
        skip_all,
        fields(method = request.method().as_str(), endpoint = request.endpoint())
    )]
    pub async fn request_with(
        &self,
        request: ApiRequest,
        retry: Option<RetryConfig>,
        rate_limit: Option<RateLimitConfig>,
    ) -> Result<ApiResponse> {
        self.credentials.validate()?;

        let (reply, rx) = oneshot::channel();
        self.queue.enqueue(QueueEntry {
            request,
            credentials: self.credentials.clone(),
            retry: retry.unwrap_or_else(|| self.config.retry.clone()),
            rate_limit: rate_limit.unwrap_or_else(|| self.config.rate_limit.clone()),
            enqueued_at: Instant::now(),
            reply,
        });

        match rx.await {
            Ok(result) => result,
            Err(_) => Err(Error::new(ErrorKind::Other(
                "request abandoned: queue was reset".to_string(),
            ))),
        }
    }

    /// Probe connectivity with a single unqueued call to `users/me`.
    ///
    /// Reduces every outcome to a boolean; never fails.
    pub async fn test_connection(&self) -> bool {
        if self.credentials.validate().is_err() {
            return false;
        }

        self.transport
            .send(&ApiRequest::get("users/me"), &self.credentials)
            .await
            .is_ok()
    }

    /// Number of calls currently waiting in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue's drain task is currently active.
    pub fn is_processing(&self) -> bool {
        self.queue.is_draining()
    }

    /// Drop all pending calls and reset the queue without settling them;
    /// abandoned callers observe an error. Destructive, intended for test
    /// isolation, not production use.
    pub fn reset_queue(&self) {
        self.queue.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::Jitter;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Transport that counts invocations and replays a scripted outcome.
    struct CountingTransport {
        calls: AtomicU32,
        failures: u32,
        status: u16,
    }

    impl CountingTransport {
        fn ok() -> Self {
            Self::failing(0, 0)
        }

        fn failing(failures: u32, status: u16) -> Self {
            Self {
                calls: AtomicU32::new(0),
                failures,
                status,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpTransport for CountingTransport {
        async fn send(&self, _: &ApiRequest, _: &Credentials) -> Result<ApiResponse> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(Error::new(ErrorKind::Api {
                    status: self.status,
                    code: "SERVER_ERROR".into(),
                    message: "boom".into(),
                    details: serde_json::Value::Null,
                }))
            } else {
                Ok(ApiResponse::wrap(json!({"id": "u1"})))
            }
        }
    }

    fn fast_config() -> ClientConfig {
        ClientConfig::builder()
            .with_retry(
                RetryConfig::default()
                    .with_base_delay(Duration::from_millis(10))
                    .with_jitter(Jitter::None),
            )
            .build()
    }

    fn client_with(transport: Arc<CountingTransport>) -> ApiClient {
        ApiClient::with_transport(
            Credentials::new("https://x.example", "abc1234567"),
            transport,
            fast_config(),
        )
    }

    #[tokio::test]
    async fn test_invalid_credentials_reject_before_transport() {
        let transport = Arc::new(CountingTransport::ok());
        let client = ApiClient::with_transport(
            Credentials::new("not-a-url", "abc1234567"),
            transport.clone(),
            fast_config(),
        );

        let err = client.request(ApiRequest::get("users/me")).await.unwrap_err();
        assert!(err.is_config());
        assert_eq!(transport.calls(), 0);
        assert_eq!(client.queue_len(), 0);
    }

    #[tokio::test]
    async fn test_request_resolves_normalized_response() {
        let transport = Arc::new(CountingTransport::ok());
        let client = client_with(transport.clone());

        let response = client.request(ApiRequest::get("users/me")).await.unwrap();
        assert_eq!(response.data, json!({"id": "u1"}));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_override_applies_per_call() {
        let transport = Arc::new(CountingTransport::failing(2, 503));
        let client = client_with(transport.clone());

        let retry = RetryConfig::default()
            .with_max_retries(3)
            .with_base_delay(Duration::from_millis(10))
            .with_jitter(Jitter::None);

        let response = client
            .request_with(ApiRequest::get("users/me"), Some(retry), None)
            .await
            .unwrap();

        assert_eq!(response.data, json!({"id": "u1"}));
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_status_fails_once() {
        let transport = Arc::new(CountingTransport::failing(10, 400));
        let client = client_with(transport.clone());

        let err = client.request(ApiRequest::get("users/me")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_test_connection_reduces_to_bool() {
        let client = client_with(Arc::new(CountingTransport::ok()));
        assert!(client.test_connection().await);

        let client = client_with(Arc::new(CountingTransport::failing(10, 401)));
        assert!(!client.test_connection().await);

        // Invalid credentials short-circuit without a transport call
        let transport = Arc::new(CountingTransport::ok());
        let client = ApiClient::with_transport(
            Credentials::new("", "key"),
            transport.clone(),
            fast_config(),
        );
        assert!(!client.test_connection().await);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_queue_introspection_idle() {
        let client = client_with(Arc::new(CountingTransport::ok()));
        assert_eq!(client.queue_len(), 0);
        assert!(!client.is_processing());
    }

    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/me"))
            .and(header("Authorization", "Bearer abc1234567"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "u1"}})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), "abc1234567").unwrap();
        let response = client.request(ApiRequest::get("users/me")).await.unwrap();

        assert_eq!(response.data, json!({"id": "u1"}));
    }
}
