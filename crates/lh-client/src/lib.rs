//! # linkhaven-client
//!
//! Core HTTP client infrastructure for the Linkhaven bookmark service API.
//!
//! Every resource operation funnels through a single chokepoint responsible
//! for:
//! - Credential validation before anything touches the network
//! - Request queuing with rate limiting (one paced outbound lane per client)
//! - Automatic retry with exponential backoff and jitter
//! - Response and error normalization
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Resource Layer                          │
//! │        (linkhaven-rest: bookmarks, lists, tags, …)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ApiClient                             │
//! │  - Validates credentials (fail fast, nothing queued)        │
//! │  - Enqueues onto the single paced request lane              │
//! │  - Runs each entry through the retry executor               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HttpTransport                           │
//! │  - One outbound HTTP call per invocation                    │
//! │  - Coerces every outcome into a normalized response/error   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use linkhaven_client::{ApiClient, ApiRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), linkhaven_client::Error> {
//!     let client = ApiClient::new("https://links.example.com", "lk_secret_key")?;
//!
//!     let me = client.request(ApiRequest::get("users/me")).await?;
//!     println!("{}", me.data["email"]);
//!
//!     let created = client
//!         .request(ApiRequest::post("bookmarks").json_value(serde_json::json!({
//!             "type": "link",
//!             "url": "https://example.com/article",
//!         })))
//!         .await?;
//!     println!("created {}", created.data["id"]);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod error;
mod queue;
mod request;
mod response;
mod retry;
mod transport;

pub use client::ApiClient;
pub use config::{ClientConfig, ClientConfigBuilder, RateLimitConfig};
pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{ApiRequest, RequestMethod};
pub use response::{ApiResponse, Meta, Pagination};
pub use retry::{Jitter, RetryConfig};
pub use transport::{HttpTransport, ReqwestTransport};

/// Path prefix every endpoint is resolved under.
pub const API_PREFIX: &str = "api/v1";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("linkhaven-api/", env!("CARGO_PKG_VERSION"));
