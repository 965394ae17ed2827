pub mod post_entity;
pub mod post_pg_repository;
pub mod post_repository_trait;
