//! Linkhaven credentials with shape validation.
//!
//! The API key is redacted in Debug output to prevent accidental exposure
//! in logs.

use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// Credentials for a Linkhaven instance: where it lives and how to
/// authenticate against it.
#[derive(Clone)]
pub struct Credentials {
    instance_url: String,
    api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("instance_url", &self.instance_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create new credentials with the given values.
    pub fn new(instance_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Get the instance URL as supplied.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Check the credential shape before any network use.
    ///
    /// Synchronous and side-effect free. Fails with a configuration error
    /// when the API key or instance URL is blank, or when the instance URL
    /// is not an absolute `http`/`https` URL. Runs before every enqueue so
    /// malformed credentials never occupy a queue slot.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "API key is required for authentication".to_string(),
            )));
        }

        if self.instance_url.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "instance URL is required for authentication".to_string(),
            )));
        }

        let parsed = Url::parse(&self.instance_url).map_err(|err| {
            Error::with_source(
                ErrorKind::Config("instance URL must be a valid HTTP or HTTPS URL".to_string()),
                err,
            )
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::Config(
                "instance URL must be a valid HTTP or HTTPS URL".to_string(),
            )));
        }

        Ok(())
    }
}
