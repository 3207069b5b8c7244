//! Bookmark operations.

use linkhaven_client::ApiRequest;
use serde_json::{json, Value};
use tracing::instrument;

use super::{page, Page};
use crate::bookmark::{
    Bookmark, BookmarkKind, CreateBookmark, ListBookmarksQuery, SearchBookmarksQuery, TagRef,
    UpdateBookmark,
};
use crate::error::{Error, Result};
use crate::validate;

impl super::RestClient {
    /// List bookmarks with optional filters and pagination.
    #[instrument(skip(self))]
    pub async fn list_bookmarks(&self, query: &ListBookmarksQuery) -> Result<Page<Bookmark>> {
        validate::validate_pagination(query.page, query.limit)?;

        let mut request = ApiRequest::get("bookmarks")
            .query_opt("page", query.page)
            .query_opt("limit", query.limit)
            .query_opt("archived", query.archived);
        if !query.tags.is_empty() {
            request = request.query("tags", query.tags.join(","));
        }
        request = request
            .query_opt("startDate", query.start_date.map(|d| d.to_rfc3339()))
            .query_opt("endDate", query.end_date.map(|d| d.to_rfc3339()));

        page(self.inner().request(request).await?)
    }

    /// Fetch a single bookmark.
    #[instrument(skip(self))]
    pub async fn get_bookmark(&self, bookmark_id: &str) -> Result<Bookmark> {
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        let response = self
            .inner()
            .request(ApiRequest::get(format!("bookmarks/{bookmark_id}")))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Create a bookmark.
    ///
    /// Link bookmarks need a valid URL, text bookmarks a non-blank body,
    /// and asset bookmarks a previously uploaded asset id.
    #[instrument(skip_all)]
    pub async fn create_bookmark(&self, input: CreateBookmark) -> Result<Bookmark> {
        validate_create(&input)?;
        let response = self
            .inner()
            .request(ApiRequest::post("bookmarks").json(&input)?)
            .await?;
        Ok(response.into_typed()?)
    }

    /// Update an existing bookmark. Only set fields change.
    #[instrument(skip(self, update))]
    pub async fn update_bookmark(
        &self,
        bookmark_id: &str,
        update: &UpdateBookmark,
    ) -> Result<Bookmark> {
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        if let Some(title) = &update.title {
            validate::check_len("title", title, validate::MAX_TITLE_LEN)?;
        }
        if let Some(note) = &update.note {
            validate::check_len("note", note, validate::MAX_NOTE_LEN)?;
        }
        if let Some(url) = &update.url {
            validate::require_url("url", url)?;
        }

        let response = self
            .inner()
            .request(ApiRequest::patch(format!("bookmarks/{bookmark_id}")).json(update)?)
            .await?;
        Ok(response.into_typed()?)
    }

    /// Delete a bookmark.
    #[instrument(skip(self))]
    pub async fn delete_bookmark(&self, bookmark_id: &str) -> Result<()> {
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        self.inner()
            .request(ApiRequest::delete(format!("bookmarks/{bookmark_id}")))
            .await?;
        Ok(())
    }

    /// Full-text search across bookmarks.
    #[instrument(skip(self), fields(q = %query.q))]
    pub async fn search_bookmarks(&self, query: &SearchBookmarksQuery) -> Result<Page<Bookmark>> {
        validate::require_non_blank("q", &query.q)?;

        let request = ApiRequest::get("bookmarks/search")
            .query("q", query.q.trim())
            .query_opt("sortOrder", query.sort_order.map(|s| s.as_str()))
            .query_opt("limit", query.limit)
            .query_opt("cursor", query.cursor.as_deref())
            .query_opt("includeContent", query.include_content);

        page(self.inner().request(request).await?)
    }

    /// Attach tags to a bookmark. Tags referenced by name are resolved or
    /// created server-side.
    #[instrument(skip(self, tags))]
    pub async fn add_bookmark_tags(&self, bookmark_id: &str, tags: &[TagRef]) -> Result<Value> {
        let request = tags_request(bookmark_id, tags, true)?;
        Ok(self.inner().request(request).await?.data)
    }

    /// Detach tags from a bookmark.
    #[instrument(skip(self, tags))]
    pub async fn remove_bookmark_tags(&self, bookmark_id: &str, tags: &[TagRef]) -> Result<Value> {
        let request = tags_request(bookmark_id, tags, false)?;
        Ok(self.inner().request(request).await?.data)
    }

    /// Attach an uploaded asset to a bookmark.
    #[instrument(skip(self))]
    pub async fn attach_bookmark_asset(
        &self,
        bookmark_id: &str,
        asset_id: &str,
        asset_type: &str,
    ) -> Result<Value> {
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        validate::require_non_blank("assetId", asset_id)?;
        validate::require_non_blank("assetType", asset_type)?;

        let request = ApiRequest::post(format!("bookmarks/{bookmark_id}/assets"))
            .json_value(json!({"id": asset_id, "assetType": asset_type}));
        Ok(self.inner().request(request).await?.data)
    }

    /// Replace one of a bookmark's assets with another uploaded asset.
    #[instrument(skip(self))]
    pub async fn replace_bookmark_asset(
        &self,
        bookmark_id: &str,
        current_asset_id: &str,
        new_asset_id: &str,
    ) -> Result<()> {
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        validate::require_non_blank("currentAssetId", current_asset_id)?;
        validate::require_non_blank("newAssetId", new_asset_id)?;

        let request = ApiRequest::put(format!(
            "bookmarks/{bookmark_id}/assets/{current_asset_id}"
        ))
        .json_value(json!({"assetId": new_asset_id}));
        self.inner().request(request).await?;
        Ok(())
    }

    /// Detach an asset from a bookmark.
    #[instrument(skip(self))]
    pub async fn detach_bookmark_asset(&self, bookmark_id: &str, asset_id: &str) -> Result<()> {
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        validate::require_non_blank("assetId", asset_id)?;

        self.inner()
            .request(ApiRequest::delete(format!(
                "bookmarks/{bookmark_id}/assets/{asset_id}"
            )))
            .await?;
        Ok(())
    }
}

fn tags_request(bookmark_id: &str, tags: &[TagRef], attach: bool) -> Result<ApiRequest> {
    validate::require_non_blank("bookmarkId", bookmark_id)?;
    if tags.is_empty() {
        return Err(Error::validation("tags", "at least one tag is required"));
    }
    for tag in tags {
        validate::require_non_blank("tagName", &tag.tag_name)?;
    }

    let endpoint = format!("bookmarks/{bookmark_id}/tags");
    let request = if attach {
        ApiRequest::post(endpoint)
    } else {
        ApiRequest::delete(endpoint)
    };
    Ok(request.json(&json!({"tags": tags}))?)
}

fn validate_create(input: &CreateBookmark) -> Result<()> {
    match input.kind {
        BookmarkKind::Link => {
            let url = input.url.as_deref().unwrap_or_default();
            validate::require_url("url", url)?;
        }
        BookmarkKind::Text => {
            let text = input.text.as_deref().unwrap_or_default();
            validate::require_non_blank("text", text)?;
            if let Some(source_url) = &input.source_url {
                validate::require_url("sourceUrl", source_url)?;
            }
        }
        BookmarkKind::Asset => {
            let asset_id = input.asset_id.as_deref().unwrap_or_default();
            validate::require_non_blank("assetId", asset_id)?;
            let asset_type = input.asset_type.as_deref().unwrap_or_default();
            validate::require_non_blank("assetType", asset_type)?;
        }
    }

    if let Some(title) = &input.title {
        validate::check_len("title", title, validate::MAX_TITLE_LEN)?;
    }
    if let Some(note) = &input.note {
        validate::check_len("note", note, validate::MAX_NOTE_LEN)?;
    }
    if let Some(tags) = &input.tags {
        if tags.len() > validate::MAX_TAGS {
            return Err(Error::validation(
                "tags",
                format!("maximum {} tags allowed", validate::MAX_TAGS),
            ));
        }
    }

    Ok(())
}
