pub mod comment_create_request;
pub mod comment_update_request;
