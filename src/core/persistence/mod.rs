//! Persistence layer: entities, repository traits and their PostgreSQL adapters.

pub mod comment;
pub mod like;
pub mod post;
pub mod user;

#[cfg(test)]
pub(crate) mod memory_store;
