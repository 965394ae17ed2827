use std::sync::Arc;

use tracing::debug;

use crate::core::persistence::post::post_entity::PostEntity;
use crate::core::persistence::post::post_repository_trait::PostRepository;
use crate::domain::post::dto::post_create_request::PostCreateRequest;
use crate::domain::post::dto::post_update_request::PostUpdateRequest;
use crate::errors::{AppError, AppResult};

pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".into())
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self) -> AppResult<Vec<PostEntity>> {
        self.repo.list().await
    }

    pub async fn get_post(&self, id: &str) -> AppResult<PostEntity> {
        self.repo.find_by_id(id).await?.ok_or_else(post_not_found)
    }

    pub async fn create_post(&self, req: PostCreateRequest) -> AppResult<PostEntity> {
        let post = PostEntity::from(req);
        self.repo.insert(&post).await?;
        debug!(post_id = %post.id, user_id = %post.user_id, "post created");
        Ok(post)
    }

    pub async fn update_post(&self, id: &str, req: PostUpdateRequest) -> AppResult<()> {
        let updated = self
            .repo
            .update_content(id, &req.post_content, req.created_at)
            .await?;

        if !updated {
            return Err(post_not_found());
        }
        Ok(())
    }

    /// Removes the post, its comments and its likes in one step.
    pub async fn delete_post(&self, id: &str) -> AppResult<()> {
        if !self.repo.delete_with_dependents(id).await? {
            return Err(post_not_found());
        }
        Ok(())
    }
}
