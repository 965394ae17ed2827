use serde::Serialize;

use crate::core::persistence::comment::comment_entity::CommentEntity;

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentEntity>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentEntity,
}
