pub mod like_entity;
pub mod like_pg_repository;
pub mod like_repository_trait;
