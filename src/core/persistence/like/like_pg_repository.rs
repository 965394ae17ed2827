use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppResult;

use super::like_entity::LikeState;
use super::like_repository_trait::LikeRepository;

#[derive(Clone)]
pub struct LikePgRepository {
    pool: PgPool,
}

impl LikePgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for LikePgRepository {
    async fn toggle(&self, post_id: &str, user_id: &str) -> AppResult<LikeState> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let state = if removed > 0 {
            LikeState::Unliked
        } else {
            sqlx::query("INSERT INTO post_likes (id, post_id, user_id) VALUES ($1, $2, $3)")
                .bind(Uuid::new_v4().to_string())
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            LikeState::Liked
        };

        tx.commit().await?;

        Ok(state)
    }

    async fn count_for_post(&self, post_id: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn exists(&self, post_id: &str, user_id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM post_likes
                WHERE post_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
