use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::comment::dto::comment_create_request::CommentCreateRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntity {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub comment_content: String,
    pub created_at: DateTime<Utc>,
}

impl CommentEntity {
    pub fn new_for_post(post_id: String, req: CommentCreateRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            post_id,
            user_id: req.user_id,
            comment_content: req.comment_content,
            created_at: Utc::now(),
        }
    }
}
