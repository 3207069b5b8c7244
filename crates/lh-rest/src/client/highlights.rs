//! Highlight operations.

use linkhaven_client::ApiRequest;
use tracing::instrument;

use super::{page, Page};
use crate::error::Result;
use crate::highlight::{CreateHighlight, Highlight, UpdateHighlight};
use crate::validate;

impl super::RestClient {
    /// List all highlights.
    #[instrument(skip(self))]
    pub async fn list_highlights(&self) -> Result<Page<Highlight>> {
        page(self.inner().request(ApiRequest::get("highlights")).await?)
    }

    /// Fetch a single highlight.
    #[instrument(skip(self))]
    pub async fn get_highlight(&self, highlight_id: &str) -> Result<Highlight> {
        validate::require_non_blank("highlightId", highlight_id)?;
        let response = self
            .inner()
            .request(ApiRequest::get(format!("highlights/{highlight_id}")))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Create a highlight on a bookmark's content.
    #[instrument(skip_all, fields(bookmark_id = %input.bookmark_id))]
    pub async fn create_highlight(&self, input: CreateHighlight) -> Result<Highlight> {
        validate::require_non_blank("bookmarkId", &input.bookmark_id)?;
        validate::require_non_blank("text", &input.text)?;
        validate::validate_offsets(input.start_offset, input.end_offset)?;
        if let Some(note) = &input.note {
            validate::check_len("note", note, validate::MAX_HIGHLIGHT_NOTE_LEN)?;
        }

        let response = self
            .inner()
            .request(ApiRequest::post("highlights").json(&input)?)
            .await?;
        Ok(response.into_typed()?)
    }

    /// Update an existing highlight. Only set fields change.
    #[instrument(skip(self, update))]
    pub async fn update_highlight(
        &self,
        highlight_id: &str,
        update: &UpdateHighlight,
    ) -> Result<Highlight> {
        validate::require_non_blank("highlightId", highlight_id)?;
        if let (Some(start), Some(end)) = (update.start_offset, update.end_offset) {
            validate::validate_offsets(start, end)?;
        }
        if let Some(note) = &update.note {
            validate::check_len("note", note, validate::MAX_HIGHLIGHT_NOTE_LEN)?;
        }

        let response = self
            .inner()
            .request(ApiRequest::patch(format!("highlights/{highlight_id}")).json(update)?)
            .await?;
        Ok(response.into_typed()?)
    }

    /// Delete a highlight.
    #[instrument(skip(self))]
    pub async fn delete_highlight(&self, highlight_id: &str) -> Result<()> {
        validate::require_non_blank("highlightId", highlight_id)?;
        self.inner()
            .request(ApiRequest::delete(format!("highlights/{highlight_id}")))
            .await?;
        Ok(())
    }
}
