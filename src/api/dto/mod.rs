//! Response envelopes.

use serde::Serialize;

pub mod comment_dto;
pub mod like_dto;
pub mod post_dto;
pub mod user_dto;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
