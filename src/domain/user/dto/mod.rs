pub mod user_create_request;
pub mod user_login_request;
pub mod user_update_request;
