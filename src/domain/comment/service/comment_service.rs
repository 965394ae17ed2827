use std::sync::Arc;

use tracing::debug;

use crate::core::persistence::comment::comment_entity::CommentEntity;
use crate::core::persistence::comment::comment_repository_trait::CommentRepository;
use crate::domain::comment::dto::comment_create_request::CommentCreateRequest;
use crate::domain::comment::dto::comment_update_request::CommentUpdateRequest;
use crate::errors::{AppError, AppResult};

pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
}

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".into())
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_post_comments(&self, post_id: &str) -> AppResult<Vec<CommentEntity>> {
        self.repo.list_for_post(post_id).await
    }

    pub async fn create_comment(
        &self,
        post_id: &str,
        req: CommentCreateRequest,
    ) -> AppResult<CommentEntity> {
        let comment = CommentEntity::new_for_post(post_id.to_string(), req);
        self.repo.insert(&comment).await?;
        debug!(comment_id = %comment.id, post_id, "comment created");
        Ok(comment)
    }

    pub async fn get_comment(&self, id: &str) -> AppResult<CommentEntity> {
        self.repo.find_by_id(id).await?.ok_or_else(comment_not_found)
    }

    pub async fn update_comment(&self, id: &str, req: CommentUpdateRequest) -> AppResult<()> {
        let updated = self
            .repo
            .update_content(id, &req.comment_content, req.created_at)
            .await?;

        if !updated {
            return Err(comment_not_found());
        }
        Ok(())
    }

    pub async fn delete_comment(&self, id: &str) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(comment_not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::memory_store::MemoryStore;
    use chrono::Utc;

    fn new_comment(content: &str) -> CommentCreateRequest {
        CommentCreateRequest {
            user_id: "u-1".into(),
            comment_content: content.into(),
        }
    }

    #[tokio::test]
    async fn comments_are_listed_per_post() {
        let service = CommentService::new(Arc::new(MemoryStore::default()));
        service.create_comment("p-1", new_comment("first")).await.unwrap();
        service.create_comment("p-1", new_comment("second")).await.unwrap();
        service.create_comment("p-2", new_comment("elsewhere")).await.unwrap();

        let comments = service.list_post_comments("p-1").await.unwrap();
        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|c| c.post_id == "p-1"));
        assert!(service.list_post_comments("p-9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_accepts_empty_content() {
        let service = CommentService::new(Arc::new(MemoryStore::default()));
        let created = service.create_comment("p-1", new_comment("typo")).await.unwrap();

        service
            .update_comment(
                &created.id,
                CommentUpdateRequest {
                    comment_content: String::new(),
                    created_at: Utc::now(),
                },
            )
            .await
            .unwrap();

        assert_eq!(service.get_comment(&created.id).await.unwrap().comment_content, "");
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let service = CommentService::new(Arc::new(MemoryStore::default()));
        let created = service.create_comment("p-1", new_comment("bye")).await.unwrap();

        service.delete_comment(&created.id).await.unwrap();
        let err = service.delete_comment(&created.id).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "Comment not found"));
    }
}
