use async_trait::async_trait;

use crate::errors::AppResult;

use super::user_entity::UserEntity;

/// Storage operations needed by the user service.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<UserEntity>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserEntity>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>>;

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<UserEntity>>;

    async fn insert(&self, user: &UserEntity) -> AppResult<()>;

    /// Persist every column of `user`. Returns `false` when no row has that id.
    async fn update(&self, user: &UserEntity) -> AppResult<bool>;
}
