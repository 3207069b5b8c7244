//! Domain validation for resource inputs.
//!
//! Handlers check their own field shapes before anything is queued; the
//! client core only validates credentials.

use url::Url;

use crate::error::{Error, Result};

pub(crate) const MAX_TITLE_LEN: usize = 500;
pub(crate) const MAX_NOTE_LEN: usize = 10_000;
pub(crate) const MAX_TAGS: usize = 50;
pub(crate) const MAX_LIST_NAME_LEN: usize = 200;
pub(crate) const MAX_LIST_DESCRIPTION_LEN: usize = 1_000;
pub(crate) const MAX_TAG_NAME_LEN: usize = 100;
pub(crate) const MAX_HIGHLIGHT_NOTE_LEN: usize = 1_000;
pub(crate) const MAX_PAGE_LIMIT: u32 = 100;
pub(crate) const MAX_ASSET_BYTES: usize = 50 * 1024 * 1024;

pub(crate) const ALLOWED_ASSET_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "application/pdf",
    "text/plain",
    "text/html",
    "text/markdown",
    "application/json",
    "application/xml",
    "video/mp4",
    "video/webm",
    "video/ogg",
    "audio/mp3",
    "audio/wav",
    "audio/ogg",
];

/// Require a non-blank value.
pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "is required"));
    }
    Ok(())
}

/// Require a value that parses as a URL.
pub fn require_url(field: &str, value: &str) -> Result<()> {
    require_non_blank(field, value)?;
    Url::parse(value)
        .map(|_| ())
        .map_err(|_| Error::validation(field, "invalid URL format"))
}

/// Reject values longer than `max` characters.
pub(crate) fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::validation(
            field,
            format!("must be {max} characters or less"),
        ));
    }
    Ok(())
}

/// Tag names: letters, digits, spaces, hyphens, and underscores.
pub fn validate_tag_name(name: &str) -> Result<()> {
    require_non_blank("name", name)?;
    check_len("name", name, MAX_TAG_NAME_LEN)?;
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
    {
        return Err(Error::validation(
            "name",
            "may only contain letters, numbers, spaces, hyphens, and underscores",
        ));
    }
    Ok(())
}

/// Page numbers start at 1; limits are capped per page.
pub fn validate_pagination(page: Option<u32>, limit: Option<u32>) -> Result<()> {
    if let Some(page) = page {
        if page < 1 {
            return Err(Error::validation("page", "must be a positive integer"));
        }
    }
    if let Some(limit) = limit {
        if limit < 1 || limit > MAX_PAGE_LIMIT {
            return Err(Error::validation(
                "limit",
                format!("must be between 1 and {MAX_PAGE_LIMIT}"),
            ));
        }
    }
    Ok(())
}

/// Highlight offsets: non-negative, start strictly before end.
pub(crate) fn validate_offsets(start: i64, end: i64) -> Result<()> {
    if start < 0 {
        return Err(Error::validation("startOffset", "must be non-negative"));
    }
    if end < 0 {
        return Err(Error::validation("endOffset", "must be non-negative"));
    }
    if start >= end {
        return Err(Error::validation(
            "endOffset",
            "must be greater than start offset",
        ));
    }
    Ok(())
}

/// Split a comma-separated tag string into trimmed, non-empty names.
pub fn parse_tag_names(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
