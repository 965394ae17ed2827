pub mod user_entity;
pub mod user_pg_repository;
pub mod user_repository_trait;
