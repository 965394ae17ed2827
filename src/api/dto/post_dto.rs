use serde::Serialize;

use crate::core::persistence::post::post_entity::PostEntity;

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<PostEntity>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: PostEntity,
}
