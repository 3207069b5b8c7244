//! Bookmark models and operation inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::asset::Asset;
use crate::tag::Tag;

/// A saved bookmark with its attached tags, content, and assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favourited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagging_status: Option<ProcessingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization_status: Option<ProcessingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub content: Vec<Content>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Crawled or user-provided content attached to a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

/// Outcome of server-side tagging or summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Success,
    Failure,
    Pending,
}

/// What a bookmark points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Link,
    Text,
    Asset,
}

/// Crawl scheduling hint for link bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlPriority {
    Low,
    Normal,
}

/// Payload for creating a bookmark. The kind selects which of the
/// type-specific fields are required; use the constructors rather than
/// filling the struct by hand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmark {
    #[serde(rename = "type")]
    pub kind: BookmarkKind,

    // Link bookmarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    // Text bookmarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    // Asset bookmarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    // Common fields for all kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_priority: Option<CrawlPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CreateBookmark {
    fn empty(kind: BookmarkKind) -> Self {
        Self {
            kind,
            url: None,
            text: None,
            source_url: None,
            asset_type: None,
            asset_id: None,
            file_name: None,
            title: None,
            note: None,
            summary: None,
            tags: None,
            archived: None,
            favourited: None,
            crawl_priority: None,
            created_at: None,
        }
    }

    /// A bookmark pointing at a URL.
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::empty(BookmarkKind::Link)
        }
    }

    /// A bookmark holding a snippet of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::empty(BookmarkKind::Text)
        }
    }

    /// A bookmark wrapping a previously uploaded asset.
    pub fn asset(asset_type: impl Into<String>, asset_id: impl Into<String>) -> Self {
        Self {
            asset_type: Some(asset_type.into()),
            asset_id: Some(asset_id.into()),
            ..Self::empty(BookmarkKind::Asset)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn favourited(mut self, favourited: bool) -> Self {
        self.favourited = Some(favourited);
        self
    }

    pub fn with_crawl_priority(mut self, priority: CrawlPriority) -> Self {
        self.crawl_priority = Some(priority);
        self
    }
}

/// Partial update for an existing bookmark; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmark {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_content: Option<String>,
}

/// A tag reference used when attaching or detaching bookmark tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    pub tag_name: String,
}

impl TagRef {
    /// Reference a tag by name; the server resolves or creates it.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            tag_id: None,
            tag_name: name.into(),
        }
    }

    /// Reference an existing tag by id and name.
    pub fn by_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag_id: Some(id.into()),
            tag_name: name.into(),
        }
    }
}

/// Filters for listing bookmarks.
#[derive(Debug, Clone, Default)]
pub struct ListBookmarksQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub archived: Option<bool>,
    pub tags: Vec<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl ListBookmarksQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

/// Result ordering for bookmark search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
    Relevance,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
            SortOrder::Relevance => "relevance",
        }
    }
}

/// Parameters for full-text bookmark search.
#[derive(Debug, Clone)]
pub struct SearchBookmarksQuery {
    pub q: String,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub include_content: Option<bool>,
}

impl SearchBookmarksQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            sort_order: None,
            limit: None,
            cursor: None,
            include_content: None,
        }
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn include_content(mut self, include: bool) -> Self {
        self.include_content = Some(include);
        self
    }
}
