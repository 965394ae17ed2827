//! User controller: connects user routes to the user service

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::user_dto::{UserMessageResponse, UserResponse, UsersResponse};
use crate::api::util::extract::ValidatedJson;
use crate::api::util::json::{created_empty, to_json};
use crate::app_state::AppState;
use crate::domain::user::dto::user_create_request::UserCreateRequest;
use crate::domain::user::dto::user_login_request::UserLoginRequest;
use crate::domain::user::dto::user_update_request::UserUpdateRequest;
use crate::errors::AppError;

pub struct UserController;

impl UserController {
    pub async fn list_users(
        State(state): State<AppState>,
    ) -> Result<Json<UsersResponse>, AppError> {
        to_json(state.user_service.list_users().await, |users| UsersResponse { users })
    }

    pub async fn create_user(
        State(state): State<AppState>,
        ValidatedJson(payload): ValidatedJson<UserCreateRequest>,
    ) -> Result<StatusCode, AppError> {
        created_empty(state.user_service.create_user(payload).await)
    }

    pub async fn login(
        State(state): State<AppState>,
        ValidatedJson(payload): ValidatedJson<UserLoginRequest>,
    ) -> Result<Json<UserMessageResponse>, AppError> {
        to_json(state.user_service.login(payload).await, |user| UserMessageResponse {
            message: "Login successful".into(),
            user,
        })
    }

    pub async fn get_user(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<UserResponse>, AppError> {
        to_json(state.user_service.get_user(&id).await, |user| UserResponse { user })
    }

    pub async fn update_user(
        State(state): State<AppState>,
        Path(id): Path<String>,
        ValidatedJson(payload): ValidatedJson<UserUpdateRequest>,
    ) -> Result<Json<UserMessageResponse>, AppError> {
        to_json(
            state.user_service.update_user(&id, payload).await,
            |user| UserMessageResponse {
                message: "User updated successfully".into(),
                user,
            },
        )
    }
}
