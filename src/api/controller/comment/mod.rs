//! Comment controller: connects comment routes to the comment service

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::comment_dto::{CommentResponse, CommentsResponse};
use crate::api::dto::MessageResponse;
use crate::api::util::extract::ValidatedJson;
use crate::api::util::json::{to_json, to_message};
use crate::app_state::AppState;
use crate::domain::comment::dto::comment_create_request::CommentCreateRequest;
use crate::domain::comment::dto::comment_update_request::CommentUpdateRequest;
use crate::errors::AppError;

pub struct CommentController;

impl CommentController {
    pub async fn list_post_comments(
        State(state): State<AppState>,
        Path(post_id): Path<String>,
    ) -> Result<Json<CommentsResponse>, AppError> {
        to_json(
            state.comment_service.list_post_comments(&post_id).await,
            |comments| CommentsResponse { comments },
        )
    }

    pub async fn create_comment(
        State(state): State<AppState>,
        Path(post_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<CommentCreateRequest>,
    ) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
        state
            .comment_service
            .create_comment(&post_id, payload)
            .await?;

        Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new("Comment created successfully")),
        ))
    }

    pub async fn get_comment(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<CommentResponse>, AppError> {
        to_json(state.comment_service.get_comment(&id).await, |comment| {
            CommentResponse { comment }
        })
    }

    pub async fn update_comment(
        State(state): State<AppState>,
        Path(id): Path<String>,
        ValidatedJson(payload): ValidatedJson<CommentUpdateRequest>,
    ) -> Result<Json<MessageResponse>, AppError> {
        to_message(
            state.comment_service.update_comment(&id, payload).await,
            "Comment updated successfully",
        )
    }

    pub async fn delete_comment(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<MessageResponse>, AppError> {
        to_message(
            state.comment_service.delete_comment(&id).await,
            "Comment deleted successfully",
        )
    }
}
