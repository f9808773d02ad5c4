//! User store implementations.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryUserRepository`] - Ephemeral in-process storage

pub mod memory_user_repository;
pub mod pg_user_repository;

pub use memory_user_repository::MemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
