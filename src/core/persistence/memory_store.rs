//! In-memory repositories used by router and service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

use super::comment::comment_entity::CommentEntity;
use super::comment::comment_repository_trait::CommentRepository;
use super::like::like_entity::{LikeEntity, LikeState};
use super::like::like_repository_trait::LikeRepository;
use super::post::post_entity::PostEntity;
use super::post::post_repository_trait::PostRepository;
use super::user::user_entity::UserEntity;
use super::user::user_repository_trait::UserRepository;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Vec<UserEntity>,
    pub posts: Vec<PostEntity>,
    pub comments: Vec<CommentEntity>,
    pub likes: Vec<LikeEntity>,
}

/// One handle implementing every repository trait over shared tables, so that
/// cross-table behaviour (cascade delete) is observable.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    pub tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::InternalServerError("memory store poisoned".into()))
    }

    /// Enforce the unique indexes the real schema carries on users.
    fn check_user_unique(tables: &Tables, user: &UserEntity) -> AppResult<()> {
        let clash = tables
            .users
            .iter()
            .any(|u| u.id != user.id && (u.email == user.email || u.cpf == user.cpf));
        if clash {
            return Err(AppError::Conflict(
                "Unique constraint violated: users".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<UserEntity>> {
        Ok(self.lock()?.users.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserEntity>> {
        Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        Ok(self.lock()?.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<UserEntity>> {
        Ok(self.lock()?.users.iter().find(|u| u.cpf == cpf).cloned())
    }

    async fn insert(&self, user: &UserEntity) -> AppResult<()> {
        let mut tables = self.lock()?;
        Self::check_user_unique(&tables, user)?;
        tables.users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &UserEntity) -> AppResult<bool> {
        let mut tables = self.lock()?;
        Self::check_user_unique(&tables, user)?;
        match tables.users.iter_mut().find(|u| u.id == user.id) {
            Some(row) => {
                *row = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<PostEntity>> {
        Ok(self.lock()?.posts.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<PostEntity>> {
        Ok(self.lock()?.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: &PostEntity) -> AppResult<()> {
        self.lock()?.posts.push(post.clone());
        Ok(())
    }

    async fn update_content(
        &self,
        id: &str,
        post_content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut tables = self.lock()?;
        match tables.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.post_content = post_content.to_string();
                post.created_at = created_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_with_dependents(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.lock()?;
        if !tables.posts.iter().any(|p| p.id == id) {
            return Ok(false);
        }
        tables.posts.retain(|p| p.id != id);
        tables.comments.retain(|c| c.post_id != id);
        tables.likes.retain(|l| l.post_id != id);
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn list_for_post(&self, post_id: &str) -> AppResult<Vec<CommentEntity>> {
        Ok(self
            .lock()?
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CommentEntity>> {
        Ok(self.lock()?.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, comment: &CommentEntity) -> AppResult<()> {
        self.lock()?.comments.push(comment.clone());
        Ok(())
    }

    async fn update_content(
        &self,
        id: &str,
        comment_content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut tables = self.lock()?;
        match tables.comments.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.comment_content = comment_content.to_string();
                comment.created_at = created_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.lock()?;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        Ok(tables.comments.len() < before)
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn toggle(&self, post_id: &str, user_id: &str) -> AppResult<LikeState> {
        let mut tables = self.lock()?;
        let before = tables.likes.len();
        tables
            .likes
            .retain(|l| !(l.post_id == post_id && l.user_id == user_id));

        if tables.likes.len() < before {
            return Ok(LikeState::Unliked);
        }

        tables.likes.push(LikeEntity {
            id: Uuid::new_v4().to_string(),
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        });
        Ok(LikeState::Liked)
    }

    async fn count_for_post(&self, post_id: &str) -> AppResult<i64> {
        let count = self
            .lock()?
            .likes
            .iter()
            .filter(|l| l.post_id == post_id)
            .count();
        Ok(count as i64)
    }

    async fn exists(&self, post_id: &str, user_id: &str) -> AppResult<bool> {
        Ok(self
            .lock()?
            .likes
            .iter()
            .any(|l| l.post_id == post_id && l.user_id == user_id))
    }
}
