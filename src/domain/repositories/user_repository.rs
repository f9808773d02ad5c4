//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User, UserSort};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;

/// Conflict returned by every store when `name` belongs to another user.
pub fn name_taken(name: &str) -> AppError {
    AppError::conflict("User already exists", json!({ "name": name }))
}

/// Store interface for user records.
///
/// Implementations own name uniqueness and id assignment. Every method is a
/// single atomic store interaction; lookups and mutations report a missing
/// record as `Ok(None)` and leave the not-found decision to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a user with the same name already exists.
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Lists all users in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self, sort: UserSort) -> Result<Vec<User>, AppError>;

    /// Renames the user with the given id and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `new_name` belongs to another user.
    /// Returns [`AppError::Internal`] on store errors.
    async fn update_name_by_id(&self, id: i64, new_name: &str) -> Result<Option<User>, AppError>;

    /// Renames the user called `old_name` and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `new_name` belongs to another user.
    /// Returns [`AppError::Internal`] on store errors.
    async fn update_name_by_name(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<Option<User>, AppError>;

    /// Deletes the user with the given id and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Deletes the user with the given name and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete_by_name(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Checks that the store answers requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
