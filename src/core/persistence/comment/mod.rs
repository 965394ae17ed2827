pub mod comment_entity;
pub mod comment_pg_repository;
pub mod comment_repository_trait;
