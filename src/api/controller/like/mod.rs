//! Like controller: connects like routes to the like service

use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::like_dto::{IsLikedResponse, LikeCountResponse};
use crate::api::dto::MessageResponse;
use crate::api::util::extract::ValidatedJson;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::like::like_entity::LikeState;
use crate::domain::like::dto::like_request::LikeRequest;
use crate::errors::AppError;

pub struct LikeController;

impl LikeController {
    pub async fn toggle_like(
        State(state): State<AppState>,
        Path(post_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<LikeRequest>,
    ) -> Result<Json<MessageResponse>, AppError> {
        to_json(
            state.like_service.toggle_like(&post_id, payload).await,
            |like_state| match like_state {
                LikeState::Liked => MessageResponse::new("Post liked successfully"),
                LikeState::Unliked => MessageResponse::new("Post unliked successfully"),
            },
        )
    }

    pub async fn like_count(
        State(state): State<AppState>,
        Path(post_id): Path<String>,
    ) -> Result<Json<LikeCountResponse>, AppError> {
        to_json(state.like_service.like_count(&post_id).await, |like_count| {
            LikeCountResponse { like_count }
        })
    }

    pub async fn is_liked(
        State(state): State<AppState>,
        Path(post_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<LikeRequest>,
    ) -> Result<Json<IsLikedResponse>, AppError> {
        to_json(
            state.like_service.is_liked(&post_id, payload).await,
            |is_liked| IsLikedResponse { is_liked },
        )
    }
}
