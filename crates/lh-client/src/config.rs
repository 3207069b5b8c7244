//! Client configuration.

use std::time::Duration;

use crate::retry::RetryConfig;

/// Rate-limit settings for the request queue.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Ceiling on sustained request frequency; controls the minimum spacing
    /// between issued requests.
    pub max_requests_per_second: f64,
    /// How long an entry may wait in the queue before being abandoned.
    pub queue_timeout: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests_per_second: 10.0,
            queue_timeout: Duration::from_secs(30),
        }
    }
}

impl RateLimitConfig {
    /// Create a new rate-limit config with the given request frequency.
    pub fn with_max_requests_per_second(mut self, rps: f64) -> Self {
        self.max_requests_per_second = rps;
        self
    }

    /// Create a new rate-limit config with the given queue timeout.
    pub fn with_queue_timeout(mut self, timeout: Duration) -> Self {
        self.queue_timeout = timeout;
        self
    }

    /// Minimum spacing between issued requests.
    pub fn min_interval(&self) -> Duration {
        if self.max_requests_per_second <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(1.0 / self.max_requests_per_second)
    }
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default retry configuration applied to every request.
    pub retry: RetryConfig,
    /// Default rate-limit configuration applied to every request.
    pub rate_limit: RateLimitConfig,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            rate_limit: RateLimitConfig::default(),
            user_agent: crate::USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the default retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    /// Disable retries.
    pub fn without_retry(mut self) -> Self {
        self.config.retry = RetryConfig::no_retry();
        self
    }

    /// Set the default rate-limit configuration.
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = rate_limit;
        self
    }

    /// Set a custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.rate_limit.max_requests_per_second, 10.0);
        assert_eq!(config.rate_limit.queue_timeout, Duration::from_secs(30));
        assert!(config.user_agent.contains("linkhaven-api"));
    }

    #[test]
    fn test_min_interval() {
        let rate = RateLimitConfig::default().with_max_requests_per_second(10.0);
        assert_eq!(rate.min_interval(), Duration::from_millis(100));

        let rate = RateLimitConfig::default().with_max_requests_per_second(2.0);
        assert_eq!(rate.min_interval(), Duration::from_millis(500));

        // Nonsensical frequencies disable pacing instead of dividing by zero
        let rate = RateLimitConfig::default().with_max_requests_per_second(0.0);
        assert_eq!(rate.min_interval(), Duration::ZERO);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .without_retry()
            .with_rate_limit(
                RateLimitConfig::default()
                    .with_max_requests_per_second(5.0)
                    .with_queue_timeout(Duration::from_secs(10)),
            )
            .with_user_agent("custom-agent/1.0")
            .build();

        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.rate_limit.max_requests_per_second, 5.0);
        assert_eq!(config.rate_limit.queue_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "custom-agent/1.0");
    }
}
