//! HTTP transport: one outbound call per invocation.
//!
//! Retry, pacing, and queuing all live above this seam, which keeps it
//! swappable for tests and host platforms that bring their own HTTP stack.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::{API_PREFIX, USER_AGENT};

/// Client-side budget for a single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Performs exactly one HTTP call for a descriptor and credentials pair,
/// coercing every outcome into a normalized response or error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest, credentials: &Credentials) -> Result<ApiResponse>;
}

/// Transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default User-Agent.
    pub fn new() -> Result<Self> {
        Self::with_user_agent(USER_AGENT)
    }

    /// Create a transport with a custom User-Agent.
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(|err| Error::with_source(ErrorKind::Config(err.to_string()), err))?;

        Ok(Self { inner })
    }

    /// Absolute URL for a request: instance URL (trailing slash stripped) +
    /// API prefix + endpoint (leading slash stripped).
    fn url(credentials: &Credentials, request: &ApiRequest) -> String {
        format!(
            "{}/{}/{}",
            credentials.instance_url().trim_end_matches('/'),
            API_PREFIX,
            request.endpoint().trim_start_matches('/'),
        )
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest, credentials: &Credentials) -> Result<ApiResponse> {
        let url = Self::url(credentials, request);
        let mut req = self.inner.request(request.method().to_reqwest(), &url);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        req = req
            .header("Content-Type", "application/json")
            .bearer_auth(credentials.api_key());

        // Caller-supplied headers win on key collision.
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if request.method().has_body() {
            if let Some(body) = &request.body {
                req = req.json(body);
            }
        }

        debug!(method = request.method().as_str(), url = %url, "sending request");

        let response = req.send().await.map_err(|err| {
            if err.is_timeout() {
                Error::with_source(ErrorKind::Timeout, err)
            } else if err.is_connect() {
                Error::with_source(
                    ErrorKind::Connection(format!(
                        "cannot connect to the Linkhaven instance at {}; check the instance URL",
                        credentials.instance_url()
                    )),
                    err,
                )
            } else {
                err.into()
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if (200..300).contains(&status) {
            debug!(status, bytes = body.len(), "response received");
            return Ok(ApiResponse::from_body(&body));
        }

        debug!(status, "non-success response");
        Err(api_error(status, &body))
    }
}

/// Build a normalized error from a non-2xx response.
///
/// JSON bodies contribute `message`/`error` and `code` fields; plain-text
/// bodies become the message verbatim. The raw body is kept under details.
fn api_error(status: u16, body: &str) -> Error {
    let mut code = "UNKNOWN_ERROR".to_string();
    let mut message = "Unknown API error".to_string();
    let mut details = Value::Null;

    if !body.is_empty() {
        match serde_json::from_str::<Value>(body) {
            Ok(parsed) => {
                if let Some(found) = parsed
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| parsed.get("error").and_then(Value::as_str))
                {
                    message = found.to_string();
                }
                if let Some(found) = parsed.get("code").and_then(Value::as_str) {
                    code = found.to_string();
                }
                details = parsed.get("details").cloned().unwrap_or(parsed);
            }
            Err(_) => {
                message = body.to_string();
                details = Value::String(body.to_string());
            }
        }
    }

    Error::new(ErrorKind::Api {
        status,
        code,
        message,
        details,
    })
}
