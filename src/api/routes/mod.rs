//! API route declarations

pub mod post_routes;
pub mod user_routes;
