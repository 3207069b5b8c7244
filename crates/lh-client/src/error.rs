//! Error types for linkhaven-client.

use serde_json::Value;

/// Result type alias for linkhaven-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for linkhaven-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status carried by the error, if the failure produced a response.
    ///
    /// Connection failures, timeouts, and queue expiry carry no status.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Symbolic error code reported by the API, if any.
    pub fn api_code(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns true if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns true if the request expired before ever being issued.
    pub fn is_queue_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::QueueTimeout)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid credentials or client configuration, detected before any
    /// request is queued.
    #[error("configuration error: {0}")]
    Config(String),

    /// The instance could not be reached (connection refused, DNS failure).
    #[error("connection error: {0}")]
    Connection(String),

    /// The request exceeded the client-side timeout budget.
    #[error("request timed out")]
    Timeout,

    /// The request expired waiting for a queue slot and was never issued.
    #[error("request timed out in queue")]
    QueueTimeout,

    /// Non-2xx response from the API.
    #[error("API error ({status}): {code} - {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        details: Value,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
