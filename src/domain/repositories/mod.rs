//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User CRUD operations

pub mod user_repository;

pub use user_repository::{UserRepository, name_taken};

#[cfg(test)]
pub use user_repository::MockUserRepository;
