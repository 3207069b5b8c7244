//! Normalized API responses.
//!
//! The API sometimes wraps payloads as `{data, meta}` and sometimes returns
//! them bare; a few endpoints answer with non-JSON text. Everything is
//! coerced into [`ApiResponse`] before it reaches a caller.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Pagination block reported by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

/// Response metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// The uniform shape every successful outcome is coerced into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// The decoded payload.
    pub data: Value,
    /// Optional metadata (pagination).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ApiResponse {
    /// Wrap a payload that carries no metadata.
    pub fn wrap(data: Value) -> Self {
        Self { data, meta: None }
    }

    /// Normalize a raw response body.
    ///
    /// JSON bodies are decoded and passed to [`ApiResponse::from_value`];
    /// bodies that do not parse as JSON are carried as the raw string.
    pub fn from_body(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::wrap(Value::String(raw.to_string())),
        }
    }

    /// Normalize an in-memory payload.
    ///
    /// Objects already containing a `data` key pass through as-is (their
    /// `meta` is decoded leniently, unknown shapes are tolerated); anything
    /// else is wrapped under `data`. Idempotent: normalizing an
    /// already-normalized payload yields an equal value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("data") => {
                let data = map.remove("data").unwrap_or(Value::Null);
                let meta = map
                    .remove("meta")
                    .and_then(|meta| serde_json::from_value(meta).ok());
                Self { data, meta }
            }
            other => Self::wrap(other),
        }
    }

    /// Deserialize the payload into a concrete type.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.data).map_err(Into::into)
    }

    /// Pagination reported by the server, if any.
    pub fn pagination(&self) -> Option<Pagination> {
        self.meta.as_ref().and_then(|meta| meta.pagination)
    }
}
