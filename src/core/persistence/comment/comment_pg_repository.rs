use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::errors::AppResult;

use super::comment_entity::CommentEntity;
use super::comment_repository_trait::CommentRepository;

#[derive(Clone)]
pub struct CommentPgRepository {
    pool: PgPool,
}

impl CommentPgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for CommentPgRepository {
    async fn list_for_post(&self, post_id: &str) -> AppResult<Vec<CommentEntity>> {
        let comments = sqlx::query_as::<_, CommentEntity>(
            r#"
            SELECT id, post_id, user_id, comment_content, created_at
            FROM post_comments
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CommentEntity>> {
        let comment = sqlx::query_as::<_, CommentEntity>(
            r#"
            SELECT id, post_id, user_id, comment_content, created_at
            FROM post_comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn insert(&self, comment: &CommentEntity) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO post_comments (id, post_id, user_id, comment_content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.post_id)
        .bind(&comment.user_id)
        .bind(&comment.comment_content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_content(
        &self,
        id: &str,
        comment_content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE post_comments SET comment_content = $2, created_at = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(comment_content)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM post_comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
