//! Highlight models and operation inputs.

use serde::{Deserialize, Serialize};

/// A highlighted span of text within a bookmark's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: String,
    pub bookmark_id: String,
    pub text: String,
    pub start_offset: i64,
    pub end_offset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HighlightColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Highlight marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Yellow,
    Red,
    Green,
    Blue,
}

/// Payload for creating a highlight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHighlight {
    pub bookmark_id: String,
    pub text: String,
    pub start_offset: i64,
    pub end_offset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<HighlightColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateHighlight {
    pub fn new(
        bookmark_id: impl Into<String>,
        text: impl Into<String>,
        start_offset: i64,
        end_offset: i64,
    ) -> Self {
        Self {
            bookmark_id: bookmark_id.into(),
            text: text.into(),
            start_offset,
            end_offset,
            color: None,
            note: None,
        }
    }

    pub fn with_color(mut self, color: HighlightColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Partial update for an existing highlight; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<HighlightColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
