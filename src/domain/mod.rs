//! Domain layer containing the user entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::User`] and its inputs)
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Request validation and outcome mapping live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
