//! List operations.

use linkhaven_client::ApiRequest;
use tracing::instrument;

use super::{page, Page};
use crate::error::Result;
use crate::list::{CreateList, List, UpdateList};
use crate::validate;

impl super::RestClient {
    /// List all lists.
    #[instrument(skip(self))]
    pub async fn list_lists(&self) -> Result<Page<List>> {
        page(self.inner().request(ApiRequest::get("lists")).await?)
    }

    /// Fetch a single list.
    #[instrument(skip(self))]
    pub async fn get_list(&self, list_id: &str) -> Result<List> {
        validate::require_non_blank("listId", list_id)?;
        let response = self
            .inner()
            .request(ApiRequest::get(format!("lists/{list_id}")))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Create a list. Smart lists must carry a query.
    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_list(&self, input: CreateList) -> Result<List> {
        validate_list_fields(Some(&input.name), input.description.as_deref())?;
        let response = self
            .inner()
            .request(ApiRequest::post("lists").json(&input)?)
            .await?;
        Ok(response.into_typed()?)
    }

    /// Update an existing list. Only set fields change.
    #[instrument(skip(self, update))]
    pub async fn update_list(&self, list_id: &str, update: &UpdateList) -> Result<List> {
        validate::require_non_blank("listId", list_id)?;
        validate_list_fields(update.name.as_deref(), update.description.as_deref())?;
        let response = self
            .inner()
            .request(ApiRequest::patch(format!("lists/{list_id}")).json(update)?)
            .await?;
        Ok(response.into_typed()?)
    }

    /// Delete a list. Bookmarks in the list are not deleted.
    #[instrument(skip(self))]
    pub async fn delete_list(&self, list_id: &str) -> Result<()> {
        validate::require_non_blank("listId", list_id)?;
        self.inner()
            .request(ApiRequest::delete(format!("lists/{list_id}")))
            .await?;
        Ok(())
    }

    /// Add a bookmark to a manual list.
    #[instrument(skip(self))]
    pub async fn add_bookmark_to_list(&self, list_id: &str, bookmark_id: &str) -> Result<()> {
        validate::require_non_blank("listId", list_id)?;
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        self.inner()
            .request(ApiRequest::put(format!(
                "lists/{list_id}/bookmarks/{bookmark_id}"
            )))
            .await?;
        Ok(())
    }

    /// Remove a bookmark from a manual list.
    #[instrument(skip(self))]
    pub async fn remove_bookmark_from_list(&self, list_id: &str, bookmark_id: &str) -> Result<()> {
        validate::require_non_blank("listId", list_id)?;
        validate::require_non_blank("bookmarkId", bookmark_id)?;
        self.inner()
            .request(ApiRequest::delete(format!(
                "lists/{list_id}/bookmarks/{bookmark_id}"
            )))
            .await?;
        Ok(())
    }
}

fn validate_list_fields(name: Option<&str>, description: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        validate::require_non_blank("name", name)?;
        validate::check_len("name", name, validate::MAX_LIST_NAME_LEN)?;
    }
    if let Some(description) = description {
        validate::check_len(
            "description",
            description,
            validate::MAX_LIST_DESCRIPTION_LEN,
        )?;
    }
    Ok(())
}
