use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::AppResult;

use super::comment_entity::CommentEntity;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list_for_post(&self, post_id: &str) -> AppResult<Vec<CommentEntity>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CommentEntity>>;

    async fn insert(&self, comment: &CommentEntity) -> AppResult<()>;

    /// Returns `false` when no comment has that id.
    async fn update_content(
        &self,
        id: &str,
        comment_content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<bool>;

    /// Returns `false` when no comment has that id.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
