use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    pub user_id: String,
    #[validate(length(min = 1))]
    pub comment_content: String,
}
