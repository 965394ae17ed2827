//! Post, like and comment routes (e.g., /posts/*)

use axum::{routing::{get, post}, Router};
use crate::api::controller::comment::CommentController;
use crate::api::controller::like::LikeController;
use crate::api::controller::post::PostController;
use crate::app_state::AppState;

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(PostController::list_posts).post(PostController::create_post))
        .route(
            "/posts/{id}",
            get(PostController::get_post)
                .put(PostController::update_post)
                .delete(PostController::delete_post),
        )

        .route("/posts/{id}/like", post(LikeController::toggle_like))
        .route("/posts/{id}/likeCount", get(LikeController::like_count))
        .route("/posts/{id}/liked", post(LikeController::is_liked))

        .route(
            "/posts/{id}/comments",
            get(CommentController::list_post_comments).post(CommentController::create_comment),
        )
        .route(
            "/posts/comments/{id}",
            get(CommentController::get_comment)
                .put(CommentController::update_comment)
                .delete(CommentController::delete_comment),
        )
}
