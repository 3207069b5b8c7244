//! Asset operations.

use linkhaven_client::ApiRequest;
use serde_json::Value;
use tracing::instrument;

use crate::asset::{Asset, UploadAsset};
use crate::error::{Error, Result};
use crate::validate;

impl super::RestClient {
    /// Upload an asset from raw bytes or a source URL.
    ///
    /// Byte uploads are capped at 50 MB and restricted to the supported
    /// content types; URL uploads are ingested server-side.
    #[instrument(skip_all)]
    pub async fn upload_asset(&self, upload: UploadAsset) -> Result<Asset> {
        validate_upload(&upload)?;
        let response = self
            .inner()
            .request(ApiRequest::post("assets").json_value(upload.to_body()))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Fetch an asset's metadata.
    #[instrument(skip(self))]
    pub async fn get_asset(&self, asset_id: &str) -> Result<Asset> {
        validate::require_non_blank("assetId", asset_id)?;
        let response = self
            .inner()
            .request(ApiRequest::get(format!("assets/{asset_id}")))
            .await?;
        Ok(response.into_typed()?)
    }

    /// Fetch an asset's content by following its reported URL.
    #[instrument(skip(self))]
    pub async fn download_asset(&self, asset_id: &str) -> Result<Value> {
        let asset = self.get_asset(asset_id).await?;
        let Some(url) = asset.url else {
            return Err(Error::validation(
                "assetId",
                "asset has no downloadable content",
            ));
        };

        // The reported URL is absolute; requests go out relative to the
        // API prefix.
        let path = url.split("/api/v1/").last().unwrap_or(&url).to_string();
        let response = self.inner().request(ApiRequest::get(path)).await?;
        Ok(response.data)
    }
}

fn validate_upload(upload: &UploadAsset) -> Result<()> {
    match upload {
        UploadAsset::Bytes {
            file_name,
            content_type,
            data,
        } => {
            validate::require_non_blank("fileName", file_name)?;
            if data.len() > validate::MAX_ASSET_BYTES {
                return Err(Error::validation(
                    "file",
                    format!(
                        "file size exceeds maximum of {}MB",
                        validate::MAX_ASSET_BYTES / (1024 * 1024)
                    ),
                ));
            }
            if !validate::ALLOWED_ASSET_TYPES.contains(&content_type.as_str()) {
                return Err(Error::validation(
                    "contentType",
                    format!("file type {content_type} is not supported"),
                ));
            }
            Ok(())
        }
        UploadAsset::Url { url, .. } => validate::require_url("url", url),
    }
}
