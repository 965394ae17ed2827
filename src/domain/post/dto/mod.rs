pub mod post_create_request;
pub mod post_update_request;
