use async_trait::async_trait;

use crate::errors::AppResult;

use super::like_entity::LikeState;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Remove every like of `user_id` on `post_id` if any exist, otherwise add one.
    async fn toggle(&self, post_id: &str, user_id: &str) -> AppResult<LikeState>;

    async fn count_for_post(&self, post_id: &str) -> AppResult<i64>;

    async fn exists(&self, post_id: &str, user_id: &str) -> AppResult<bool>;
}
