//! Controllers: connect routes to domain services

pub mod comment;
pub mod like;
pub mod post;
pub mod user;
