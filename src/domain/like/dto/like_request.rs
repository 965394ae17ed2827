use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both the toggle and the "is liked" check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: String,
}
