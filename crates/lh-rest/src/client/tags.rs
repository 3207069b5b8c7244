//! Tag operations.

use linkhaven_client::ApiRequest;
use serde_json::json;
use tracing::instrument;

use super::{page, Page};
use crate::bookmark::Bookmark;
use crate::error::Result;
use crate::tag::Tag;
use crate::validate;

impl super::RestClient {
    /// List all tags.
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> Result<Page<Tag>> {
        page(self.inner().request(ApiRequest::get("tags")).await?)
    }

    /// Fetch a single tag.
    #[instrument(skip(self))]
    pub async fn get_tag(&self, tag_id: &str) -> Result<Tag> {
        validate::require_non_blank("tagId", tag_id)?;
        let response = self
            .inner()
            .request(ApiRequest::get(format!("tags/{tag_id}")))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Create a tag.
    #[instrument(skip(self))]
    pub async fn create_tag(&self, name: &str) -> Result<Tag> {
        validate::validate_tag_name(name)?;
        let response = self
            .inner()
            .request(ApiRequest::post("tags").json_value(json!({"name": name})))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Rename a tag.
    #[instrument(skip(self))]
    pub async fn update_tag(&self, tag_id: &str, name: &str) -> Result<Tag> {
        validate::require_non_blank("tagId", tag_id)?;
        validate::validate_tag_name(name)?;
        let response = self
            .inner()
            .request(ApiRequest::patch(format!("tags/{tag_id}")).json_value(json!({"name": name})))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Delete a tag. It is detached from all bookmarks.
    #[instrument(skip(self))]
    pub async fn delete_tag(&self, tag_id: &str) -> Result<()> {
        validate::require_non_blank("tagId", tag_id)?;
        self.inner()
            .request(ApiRequest::delete(format!("tags/{tag_id}")))
            .await?;
        Ok(())
    }

    /// List the bookmarks carrying a tag.
    #[instrument(skip(self))]
    pub async fn tagged_bookmarks(&self, tag_id: &str) -> Result<Page<Bookmark>> {
        validate::require_non_blank("tagId", tag_id)?;
        page(
            self.inner()
                .request(ApiRequest::get(format!("tags/{tag_id}/bookmarks")))
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RestClient;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> RestClient {
        RestClient::new(server.uri(), "test-key").unwrap()
    }

    #[tokio::test]
    async fn test_create_tag() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/tags"))
            .and(body_json(json!({"name": "rust"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": "t1", "name": "rust"}})),
            )
            .mount(&server)
            .await;

        let tag = client(&server).await.create_tag("rust").await.unwrap();
        assert_eq!(tag.id, "t1");
    }

    #[tokio::test]
    async fn test_create_tag_rejects_bad_charset() {
        let server = MockServer::start().await;
        let err = client(&server)
            .await
            .create_tag("no/slashes!")
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tagged_bookmarks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/tags/t1/bookmarks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "b1", "createdAt": "2026-01-01T00:00:00Z"}],
            })))
            .mount(&server)
            .await;

        let page = client(&server).await.tagged_bookmarks("t1").await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "b1");
    }

    #[tokio::test]
    async fn test_update_and_delete_tag() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/v1/tags/t1"))
            .and(body_json(json!({"name": "rust-lang"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": "t1", "name": "rust-lang"}})),
            )
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/tags/t1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client(&server).await;
        let tag = client.update_tag("t1", "rust-lang").await.unwrap();
        assert_eq!(tag.name, "rust-lang");

        client.delete_tag("t1").await.unwrap();
    }
}
