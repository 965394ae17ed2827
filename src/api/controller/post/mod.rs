//! Post controller: connects post routes to the post service

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::post_dto::{PostResponse, PostsResponse};
use crate::api::dto::MessageResponse;
use crate::api::util::extract::ValidatedJson;
use crate::api::util::json::{created_empty, to_json, to_message};
use crate::app_state::AppState;
use crate::domain::post::dto::post_create_request::PostCreateRequest;
use crate::domain::post::dto::post_update_request::PostUpdateRequest;
use crate::errors::AppError;

pub struct PostController;

impl PostController {
    pub async fn list_posts(
        State(state): State<AppState>,
    ) -> Result<Json<PostsResponse>, AppError> {
        to_json(state.post_service.list_posts().await, |posts| PostsResponse { posts })
    }

    pub async fn create_post(
        State(state): State<AppState>,
        ValidatedJson(payload): ValidatedJson<PostCreateRequest>,
    ) -> Result<StatusCode, AppError> {
        created_empty(state.post_service.create_post(payload).await)
    }

    pub async fn get_post(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<PostResponse>, AppError> {
        to_json(state.post_service.get_post(&id).await, |post| PostResponse { post })
    }

    pub async fn update_post(
        State(state): State<AppState>,
        Path(id): Path<String>,
        ValidatedJson(payload): ValidatedJson<PostUpdateRequest>,
    ) -> Result<Json<MessageResponse>, AppError> {
        to_message(
            state.post_service.update_post(&id, payload).await,
            "Post updated successfully",
        )
    }

    pub async fn delete_post(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<MessageResponse>, AppError> {
        to_message(
            state.post_service.delete_post(&id).await,
            "Post deleted successfully",
        )
    }
}
