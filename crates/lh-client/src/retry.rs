//! Retry policy with exponential backoff and jitter.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::transport::HttpTransport;

/// Source of backoff jitter. Injectable so tests can run deterministically.
#[derive(Clone)]
pub enum Jitter {
    /// Uniform random jitter of up to 10% of the computed delay.
    Random,
    /// No jitter; delays are exactly the capped exponential backoff.
    None,
    /// Caller-supplied fraction in `[0, 1)`, scaled to 10% of the delay.
    Fraction(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl Jitter {
    /// Delay with this source's jitter added on top.
    pub fn apply(&self, delay: Duration) -> Duration {
        let fraction = match self {
            Jitter::Random => rand::rng().random::<f64>(),
            Jitter::None => return delay,
            Jitter::Fraction(fraction) => fraction(),
        };
        delay + delay.mul_f64(fraction.clamp(0.0, 1.0) * 0.1)
    }
}

impl std::fmt::Debug for Jitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Jitter::Random => f.write_str("Random"),
            Jitter::None => f.write_str("None"),
            Jitter::Fraction(_) => f.write_str("Fraction(..)"),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial try.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_delay: Duration,
    /// Cap applied to the computed backoff delay.
    pub max_delay: Duration,
    /// HTTP status codes eligible for retry.
    pub retryable_status: HashSet<u16>,
    /// Jitter source for backoff delays.
    pub jitter: Jitter,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(30),
            retryable_status: [408, 429, 500, 502, 503, 504].into_iter().collect(),
            jitter: Jitter::Random,
        }
    }
}

impl RetryConfig {
    /// Create a new retry config with the given max retries.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a new retry config with the given base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Create a new retry config with the given max delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Create a new retry config with the given retryable status codes.
    pub fn with_retryable_status(mut self, status: impl IntoIterator<Item = u16>) -> Self {
        self.retryable_status = status.into_iter().collect();
        self
    }

    /// Create a new retry config with the given jitter source.
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// Disable retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Backoff delay for a zero-based attempt index, before jitter.
    ///
    /// The first retry waits `base_delay`, the second `2 * base_delay`, and
    /// so on, capped at `max_delay`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        std::cmp::min(self.base_delay.saturating_mul(factor), self.max_delay)
    }

    /// Whether `err` may be retried under this configuration.
    ///
    /// Errors carrying an HTTP status are retried only when that status is
    /// in the retryable set. Errors without a status (connection failures,
    /// timeouts) stay eligible for the full retry budget.
    pub fn should_retry(&self, err: &Error) -> bool {
        match err.status_code() {
            Some(status) => self.retryable_status.contains(&status),
            None => true,
        }
    }
}

/// Run one request through the transport with bounded retry.
///
/// Issues up to `max_retries + 1` attempts total. A non-retryable failure
/// stops immediately; an exhausted budget re-raises the last error
/// unchanged.
pub(crate) async fn execute(
    transport: &dyn HttpTransport,
    request: &ApiRequest,
    credentials: &Credentials,
    config: &RetryConfig,
) -> Result<ApiResponse> {
    let mut attempt = 0;
    loop {
        match transport.send(request, credentials).await {
            Ok(response) => return Ok(response),
            Err(err) => {
                if attempt >= config.max_retries || !config.should_retry(&err) {
                    return Err(err);
                }

                let delay = config.jitter.apply(config.backoff_delay(attempt));
                warn!(
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
