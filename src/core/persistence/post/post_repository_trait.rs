use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::AppResult;

use super::post_entity::PostEntity;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<PostEntity>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<PostEntity>>;

    async fn insert(&self, post: &PostEntity) -> AppResult<()>;

    /// Replace content and timestamp. Returns `false` when the post does not exist.
    async fn update_content(
        &self,
        id: &str,
        post_content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<bool>;

    /// Delete the post together with its comments and likes, all or nothing.
    /// Returns `false` (and deletes nothing) when the post does not exist.
    async fn delete_with_dependents(&self, id: &str) -> AppResult<bool>;
}
