use std::sync::Arc;

use tracing::debug;

use crate::core::persistence::user::user_entity::UserEntity;
use crate::core::persistence::user::user_repository_trait::UserRepository;
use crate::domain::user::dto::user_create_request::UserCreateRequest;
use crate::domain::user::dto::user_login_request::UserLoginRequest;
use crate::domain::user::dto::user_update_request::UserUpdateRequest;
use crate::errors::{AppError, AppResult};

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserEntity>> {
        self.repo.list().await
    }

    /// Register a user. Email is checked before cpf, so a request clashing on
    /// both reports the email.
    pub async fn create_user(&self, req: UserCreateRequest) -> AppResult<UserEntity> {
        if self.repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".into()));
        }

        if self.repo.find_by_cpf(&req.cpf).await?.is_some() {
            return Err(AppError::Conflict("CPF already exists".into()));
        }

        let user = UserEntity::from(req);
        self.repo.insert(&user).await?;
        debug!(user_id = %user.id, "user created");

        Ok(user)
    }

    pub async fn login(&self, req: UserLoginRequest) -> AppResult<UserEntity> {
        match self.repo.find_by_email(&req.email).await? {
            Some(user) if user.password == req.password => Ok(user),
            _ => Err(AppError::Unauthorized("Invalid email or password".into())),
        }
    }

    pub async fn get_user(&self, id: &str) -> AppResult<UserEntity> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    /// Partial update. Uniqueness of a changed email/cpf is left to the store.
    pub async fn update_user(&self, id: &str, req: UserUpdateRequest) -> AppResult<UserEntity> {
        let mut user = self.get_user(id).await?;
        user.apply_update(req);

        if !self.repo.update(&user).await? {
            return Err(AppError::NotFound("User not found".into()));
        }

        Ok(user)
    }
}
