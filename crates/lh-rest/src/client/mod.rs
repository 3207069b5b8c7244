//! Linkhaven REST API client.
//!
//! This client wraps `ApiClient` from `linkhaven-client` and provides typed
//! methods for every resource: bookmarks, lists, tags, highlights, users,
//! and assets.

use linkhaven_client::{ApiClient, ApiResponse, ClientConfig, Pagination};
use serde::de::DeserializeOwned;

use crate::error::Result;

mod assets;
mod bookmarks;
mod highlights;
mod lists;
mod tags;
mod users;

/// Typed Linkhaven REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use linkhaven_rest::{CreateBookmark, RestClient};
///
/// let client = RestClient::new("https://links.example.com", "lk_secret")?;
///
/// // Create
/// let bookmark = client
///     .create_bookmark(CreateBookmark::link("https://example.com"))
///     .await?;
///
/// // Read
/// let same = client.get_bookmark(&bookmark.id).await?;
///
/// // Delete
/// client.delete_bookmark(&bookmark.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    client: ApiClient,
}

impl RestClient {
    /// Create a new REST client with the given instance URL and API key.
    pub fn new(instance_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(instance_url, api_key)?,
        })
    }

    /// Create a new REST client with custom client configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            client: ApiClient::with_config(instance_url, api_key, config)?,
        })
    }

    /// Create a REST client from an existing ApiClient.
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get the underlying ApiClient.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }
}

/// One page of a list endpoint: the decoded items plus any pagination the
/// server reported.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Decode a normalized list response into a typed page.
pub(crate) fn page<T: DeserializeOwned>(response: ApiResponse) -> Result<Page<T>> {
    let pagination = response.pagination();
    let items = response.into_typed()?;
    Ok(Page { items, pagination })
}
