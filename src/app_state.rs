use std::sync::Arc;

use sqlx::PgPool;

use crate::core::persistence::comment::comment_pg_repository::CommentPgRepository;
use crate::core::persistence::comment::comment_repository_trait::CommentRepository;
use crate::core::persistence::like::like_pg_repository::LikePgRepository;
use crate::core::persistence::like::like_repository_trait::LikeRepository;
use crate::core::persistence::post::post_pg_repository::PostPgRepository;
use crate::core::persistence::post::post_repository_trait::PostRepository;
use crate::core::persistence::user::user_pg_repository::UserPgRepository;
use crate::core::persistence::user::user_repository_trait::UserRepository;
use crate::domain::comment::service::comment_service::CommentService;
use crate::domain::like::service::like_service::LikeService;
use crate::domain::post::service::post_service::PostService;
use crate::domain::user::service::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub post_service: Arc<PostService>,
    pub like_service: Arc<LikeService>,
    pub comment_service: Arc<CommentService>,
}

pub fn build_app_state(pool: PgPool) -> AppState {
    AppState::from_repositories(
        Arc::new(UserPgRepository::new(pool.clone())),
        Arc::new(PostPgRepository::new(pool.clone())),
        Arc::new(LikePgRepository::new(pool.clone())),
        Arc::new(CommentPgRepository::new(pool)),
    )
}

impl AppState {
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users)),
            post_service: Arc::new(PostService::new(posts)),
            like_service: Arc::new(LikeService::new(likes)),
            comment_service: Arc::new(CommentService::new(comments)),
        }
    }
}
