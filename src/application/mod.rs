//! Application layer services implementing the request-handling rules.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User creation, lookup, rename and removal

pub mod services;
