//! End-to-end coverage of the core client: credential gating, retry,
//! queue pacing, and normalization over real HTTP.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use linkhaven_client::{
    ApiClient, ApiRequest, ClientConfig, Jitter, RateLimitConfig, RetryConfig,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryConfig {
    RetryConfig::default()
        .with_base_delay(Duration::from_millis(10))
        .with_jitter(Jitter::None)
}

#[tokio::test]
async fn scenario_a_simple_get_resolves_normalized_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("Authorization", "Bearer abc1234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "u1"}})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "abc1234567").unwrap();
    let response = client.request(ApiRequest::get("users/me")).await.unwrap();

    assert_eq!(response.data, json!({"id": "u1"}));
}

#[tokio::test]
async fn scenario_b_retries_through_transient_503s() {
    let server = MockServer::start().await;
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = calls.clone();

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(move |_: &wiremock::Request| {
            let call = calls_clone.fetch_add(1, Ordering::SeqCst);
            if call < 2 {
                ResponseTemplate::new(503)
            } else {
                ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}}))
            }
        })
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "abc1234567").unwrap();
    let response = client
        .request_with(
            ApiRequest::get("users/me"),
            Some(fast_retry().with_max_retries(3)),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.data, json!({"ok": true}));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn scenario_c_malformed_instance_url_rejects_before_network() {
    let client = ApiClient::new("not-a-url", "abc1234567").unwrap();
    let err = client.request(ApiRequest::get("users/me")).await.unwrap_err();

    assert!(err.is_config());
}

#[tokio::test]
async fn non_retryable_status_is_not_retried() {
    let server = MockServer::start().await;
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = calls.clone();

    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks/missing"))
        .respond_with(move |_: &wiremock::Request| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(404).set_body_json(json!({
                "code": "RESOURCE_NOT_FOUND",
                "message": "no such bookmark",
            }))
        })
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "abc1234567").unwrap();
    let err = client
        .request_with(
            ApiRequest::get("bookmarks/missing"),
            Some(fast_retry().with_max_retries(5)),
            None,
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.api_code(), Some("RESOURCE_NOT_FOUND"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn requests_are_issued_fifo_and_paced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = ApiClient::with_config(
        server.uri(),
        "abc1234567",
        ClientConfig::builder()
            .without_retry()
            .with_rate_limit(RateLimitConfig::default().with_max_requests_per_second(20.0))
            .build(),
    )
    .unwrap();

    let started = Instant::now();
    let (first, second, third) = tokio::join!(
        client.request(ApiRequest::get("bookmarks/0")),
        client.request(ApiRequest::get("bookmarks/1")),
        client.request(ApiRequest::get("bookmarks/2")),
    );
    first.unwrap();
    second.unwrap();
    third.unwrap();
    let elapsed = started.elapsed();

    // Three requests at 20 rps leave at least two 50ms gaps.
    assert!(
        elapsed >= Duration::from_millis(100),
        "requests completed too quickly: {elapsed:?}"
    );

    let requests = server.received_requests().await.unwrap();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "/api/v1/bookmarks/0",
            "/api/v1/bookmarks/1",
            "/api/v1/bookmarks/2"
        ]
    );
}

#[tokio::test]
async fn queued_entry_expires_behind_a_slow_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_config(
        server.uri(),
        "abc1234567",
        ClientConfig::builder().without_retry().build(),
    )
    .unwrap();

    let slow = client.request(ApiRequest::get("bookmarks/slow"));
    let expiring = client.request_with(
        ApiRequest::get("bookmarks/expiring"),
        None,
        Some(RateLimitConfig::default().with_queue_timeout(Duration::from_millis(50))),
    );

    let (slow_result, expiring_result) = tokio::join!(slow, expiring);
    slow_result.unwrap();
    let err = expiring_result.unwrap_err();
    assert!(err.is_queue_timeout());

    // The expired entry never reached the server.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/v1/bookmarks/slow");
}

#[tokio::test]
async fn test_connection_probe() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "u1"}})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "abc1234567").unwrap();
    assert!(client.test_connection().await);

    let client = ApiClient::new("https://unreachable.invalid", "abc1234567").unwrap();
    assert!(!client.test_connection().await);
}
