//! Error types for linkhaven-rest.

/// Result type alias for REST operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for REST operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the underlying HTTP client.
    #[error(transparent)]
    Client(#[from] linkhaven_client::Error),

    /// Input rejected before any request was made.
    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns true if the input was rejected before any request was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
