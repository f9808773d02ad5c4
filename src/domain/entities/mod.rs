//! Core domain entities.
//!
//! - [`User`] - A stored user record
//! - [`NewUser`] - Input for creating a user
//! - [`UserSort`] - Ordering applied when listing users

pub mod user;

pub use user::{NewUser, SortField, SortOrder, User, UserSort};
