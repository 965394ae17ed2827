use std::sync::Arc;

use tracing::debug;

use crate::core::persistence::like::like_entity::LikeState;
use crate::core::persistence::like::like_repository_trait::LikeRepository;
use crate::domain::like::dto::like_request::LikeRequest;
use crate::errors::AppResult;

pub struct LikeService {
    repo: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(repo: Arc<dyn LikeRepository>) -> Self {
        Self { repo }
    }

    /// Flip the like state of `req.user_id` on `post_id`.
    pub async fn toggle_like(&self, post_id: &str, req: LikeRequest) -> AppResult<LikeState> {
        let state = self.repo.toggle(post_id, &req.user_id).await?;
        debug!(post_id, user_id = %req.user_id, ?state, "like toggled");
        Ok(state)
    }

    pub async fn like_count(&self, post_id: &str) -> AppResult<i64> {
        self.repo.count_for_post(post_id).await
    }

    pub async fn is_liked(&self, post_id: &str, req: LikeRequest) -> AppResult<bool> {
        self.repo.exists(post_id, &req.user_id).await
    }
}
