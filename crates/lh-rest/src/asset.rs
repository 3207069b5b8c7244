//! Asset models and upload inputs.

use base64::prelude::{Engine, BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// An uploaded file known to the instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for uploading an asset, either from raw bytes or by pointing the
/// server at a source URL to ingest.
#[derive(Debug, Clone)]
pub enum UploadAsset {
    Bytes {
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    },
    Url {
        url: String,
        file_name: Option<String>,
    },
}

impl UploadAsset {
    /// Upload raw file bytes.
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self::Bytes {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Ask the server to ingest the file behind a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url {
            url: url.into(),
            file_name: None,
        }
    }

    /// Override the stored file name for a URL ingestion.
    pub fn with_file_name(self, name: impl Into<String>) -> Self {
        match self {
            Self::Url { url, .. } => Self::Url {
                url,
                file_name: Some(name.into()),
            },
            Self::Bytes {
                content_type, data, ..
            } => Self::Bytes {
                file_name: name.into(),
                content_type,
                data,
            },
        }
    }

    /// Wire form of the upload request. File bytes travel base64-encoded.
    pub(crate) fn to_body(&self) -> Value {
        match self {
            Self::Bytes {
                file_name,
                content_type,
                data,
            } => json!({
                "fileName": file_name,
                "contentType": content_type,
                "data": BASE64_STANDARD.encode(data),
            }),
            Self::Url { url, file_name } => match file_name {
                Some(name) => json!({"url": url, "fileName": name}),
                None => json!({"url": url}),
            },
        }
    }
}
