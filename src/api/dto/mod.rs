//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and query-string (de)serialization.

pub mod health;
pub mod user;
