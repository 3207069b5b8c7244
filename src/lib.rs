//! # linkhaven-api
//!
//! A Linkhaven bookmark service API client library for Rust.
//!
//! This library provides typed access to a Linkhaven instance with built-in
//! credential validation, request queuing with rate limiting, retry with
//! exponential backoff, and response/error normalization.
//!
//! ## Crates
//!
//! - **linkhaven-client** - Core HTTP client infrastructure: request queue,
//!   rate limiting, retry, transport, normalization
//! - **linkhaven-rest** - Typed REST operations: bookmarks, lists, tags,
//!   highlights, users, assets
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linkhaven_api::rest::{CreateBookmark, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new("https://links.example.com", "lk_secret")?;
//!
//!     let bookmark = client
//!         .create_bookmark(
//!             CreateBookmark::link("https://example.com/article")
//!                 .with_tags(["reading"]),
//!         )
//!         .await?;
//!
//!     println!("saved {}", bookmark.id);
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "client")]
pub use linkhaven_client as client;
#[cfg(feature = "rest")]
pub use linkhaven_rest as rest;
