//! # linkhaven-rest
//!
//! Typed operations for the Linkhaven bookmark service REST API.
//!
//! ## Features
//!
//! - **Bookmarks** - CRUD, full-text search, tag and asset management
//! - **Lists** - CRUD plus bookmark membership
//! - **Tags** - CRUD plus tagged-bookmark lookup
//! - **Highlights** - CRUD
//! - **Users** - current user and usage stats
//! - **Assets** - upload and fetch
//!
//! Each operation validates its domain inputs (URL shape, field lengths,
//! offset ordering) before anything touches the network; transport,
//! queuing, retry, and normalization live in `linkhaven-client`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use linkhaven_rest::{CreateBookmark, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), linkhaven_rest::Error> {
//!     let client = RestClient::new("https://links.example.com", "lk_secret")?;
//!
//!     let bookmark = client
//!         .create_bookmark(
//!             CreateBookmark::link("https://example.com/article")
//!                 .with_title("Worth keeping")
//!                 .with_tags(["reading", "rust"]),
//!         )
//!         .await?;
//!
//!     println!("created {}", bookmark.id);
//!     Ok(())
//! }
//! ```

mod asset;
mod bookmark;
mod client;
mod error;
mod highlight;
mod list;
mod tag;
mod user;
pub mod validate;

pub use asset::{Asset, UploadAsset};
pub use bookmark::{
    Bookmark, BookmarkKind, Content, CrawlPriority, CreateBookmark, ListBookmarksQuery,
    ProcessingStatus, SearchBookmarksQuery, SortOrder, TagRef, UpdateBookmark,
};
pub use client::{Page, RestClient};
pub use error::{Error, Result};
pub use highlight::{CreateHighlight, Highlight, HighlightColor, UpdateHighlight};
pub use list::{CreateList, List, ListKind, UpdateList};
pub use tag::{AttachedBy, Tag};
pub use user::{User, UserRole, UserStats};
