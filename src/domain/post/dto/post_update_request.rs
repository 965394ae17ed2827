use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full replacement of a post's editable fields; both are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    pub post_content: String,
    pub created_at: DateTime<Utc>,
}
