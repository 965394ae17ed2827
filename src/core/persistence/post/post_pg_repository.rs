use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppResult;

use super::post_entity::PostEntity;
use super::post_repository_trait::PostRepository;

#[derive(Clone)]
pub struct PostPgRepository {
    pool: PgPool,
}

impl PostPgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostPgRepository {
    async fn list(&self) -> AppResult<Vec<PostEntity>> {
        let posts = sqlx::query_as::<_, PostEntity>(
            "SELECT id, user_id, post_content, created_at FROM posts",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<PostEntity>> {
        let post = sqlx::query_as::<_, PostEntity>(
            "SELECT id, user_id, post_content, created_at FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn insert(&self, post: &PostEntity) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, user_id, post_content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&post.id)
        .bind(&post.user_id)
        .bind(&post.post_content)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_content(
        &self,
        id: &str,
        post_content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE posts SET post_content = $2, created_at = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(post_content)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_with_dependents(&self, id: &str) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let comments = sqlx::query("DELETE FROM post_comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let likes = sqlx::query("DELETE FROM post_likes WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        debug!(post_id = id, comments, likes, "post deleted with dependents");

        Ok(true)
    }
}
