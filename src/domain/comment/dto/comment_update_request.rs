use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Edit payload. Unlike creation, empty content is accepted here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    pub comment_content: String,
    pub created_at: DateTime<Utc>,
}
