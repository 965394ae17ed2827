use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::post::dto::post_create_request::PostCreateRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostEntity {
    pub id: String,
    pub user_id: String,
    pub post_content: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostCreateRequest> for PostEntity {
    fn from(req: PostCreateRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: req.user_id,
            post_content: req.post_content,
            created_at: Utc::now(),
        }
    }
}
