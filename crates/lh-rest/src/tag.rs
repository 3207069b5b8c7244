//! Tag models.

use serde::{Deserialize, Serialize};

/// A tag attached to bookmarks, either by the user or by the server's
/// automatic tagger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_by: Option<AttachedBy>,
}

/// Who attached a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachedBy {
    Ai,
    Human,
}
