//! User management service.

use crate::domain::entities::{NewUser, SortField, SortOrder, User, UserSort};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

const NAME_REQUIRED: &str = "User name is required";
const NEW_NAME_REQUIRED: &str = "New name is required";
const OLD_AND_NEW_NAME_REQUIRED: &str = "Old name and new name are required";
const INVALID_SORT_FIELD: &str = "Invalid sort field";
const NO_USERS_FOUND: &str = "No users found";
const USER_NOT_FOUND: &str = "User not found";

/// Service implementing the user resource operations.
///
/// Every operation follows the same shape: check required inputs, make
/// exactly one repository call, then map the outcome. Inputs that fail the
/// presence checks never reach the repository.
///
/// The service holds no mutable state of its own; all shared state lives
/// behind the [`UserRepository`].
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a user with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is missing or empty.
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_user(&self, name: Option<&str>) -> Result<User, AppError> {
        let name = required(name, NAME_REQUIRED)?;

        let user = self
            .repository
            .create(NewUser {
                name: name.to_string(),
            })
            .await
            .inspect_err(|e| log_conflict(e, name))?;

        tracing::info!(user_id = user.id, name = %user.name, "User created");
        Ok(user)
    }

    /// Retrieves the user with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is missing or empty.
    /// Returns [`AppError::NotFound`] if no user has that name.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_user_by_name(&self, name: Option<&str>) -> Result<User, AppError> {
        let name = required(name, NAME_REQUIRED)?;

        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| user_not_found(json!({ "name": name })))
    }

    /// Retrieves the user with the given identifier.
    ///
    /// Identifiers that are not positive integers cannot exist in the store
    /// and are reported as not found without a lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, AppError> {
        let user_id = parse_id(id)?;

        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(json!({ "id": id })))
    }

    /// Lists every user ordered by `sort_by` and `sort_order`.
    ///
    /// # Defaults
    ///
    /// - `sort_by`: `name` (the only recognized field)
    /// - `sort_order`: ascending; `desc`/`descending` select descending
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `sort_by` names an unknown field.
    /// Returns [`AppError::NotFound`] if the store holds no users.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_users(
        &self,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Vec<User>, AppError> {
        let field = match sort_by {
            None => SortField::default(),
            Some(value) => SortField::parse(value).ok_or_else(|| {
                AppError::bad_request(
                    INVALID_SORT_FIELD,
                    json!({ "sort_by": value, "allowed": ["name"] }),
                )
            })?,
        };
        let order = sort_order
            .map(SortOrder::parse_lenient)
            .unwrap_or_default();

        let users = self.repository.list(UserSort::new(field, order)).await?;

        if users.is_empty() {
            return Err(AppError::not_found(NO_USERS_FOUND, json!({})));
        }

        Ok(users)
    }

    /// Renames the user currently called `old_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either name is missing or empty.
    /// Returns [`AppError::NotFound`] if no user is called `old_name`.
    /// Returns [`AppError::Conflict`] if `new_name` is already taken.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update_user_by_name(
        &self,
        old_name: Option<&str>,
        new_name: Option<&str>,
    ) -> Result<User, AppError> {
        let (old_name, new_name) = match (present(old_name), present(new_name)) {
            (Some(old_name), Some(new_name)) => (old_name, new_name),
            _ => {
                return Err(AppError::bad_request(
                    OLD_AND_NEW_NAME_REQUIRED,
                    json!({ "fields": ["oldName", "name"] }),
                ));
            }
        };

        let user = self
            .repository
            .update_name_by_name(old_name, new_name)
            .await
            .inspect_err(|e| log_conflict(e, new_name))?
            .ok_or_else(|| user_not_found(json!({ "name": old_name })))?;

        tracing::info!(user_id = user.id, old_name, new_name, "User renamed");
        Ok(user)
    }

    /// Renames the user with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `new_name` is missing or empty.
    /// Returns [`AppError::NotFound`] if the id is malformed or unknown.
    /// Returns [`AppError::Conflict`] if `new_name` is already taken.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update_user_by_id(
        &self,
        id: &str,
        new_name: Option<&str>,
    ) -> Result<User, AppError> {
        let new_name = required(new_name, NEW_NAME_REQUIRED)?;
        let user_id = parse_id(id)?;

        let user = self
            .repository
            .update_name_by_id(user_id, new_name)
            .await
            .inspect_err(|e| log_conflict(e, new_name))?
            .ok_or_else(|| user_not_found(json!({ "id": id })))?;

        tracing::info!(user_id = user.id, new_name, "User renamed");
        Ok(user)
    }

    /// Deletes the user with the given name and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is missing or empty.
    /// Returns [`AppError::NotFound`] if no user has that name.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_user_by_name(&self, name: Option<&str>) -> Result<User, AppError> {
        let name = required(name, NAME_REQUIRED)?;

        let user = self
            .repository
            .delete_by_name(name)
            .await?
            .ok_or_else(|| user_not_found(json!({ "name": name })))?;

        tracing::info!(user_id = user.id, name = %user.name, "User deleted");
        Ok(user)
    }

    /// Deletes the user with the given identifier and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_user_by_id(&self, id: &str) -> Result<User, AppError> {
        let user_id = parse_id(id)?;

        let user = self
            .repository
            .delete_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(json!({ "id": id })))?;

        tracing::info!(user_id = user.id, name = %user.name, "User deleted");
        Ok(user)
    }

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store does not answer.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Returns the value if it is present and non-empty.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    present(value).ok_or_else(|| AppError::bad_request(message, json!({})))
}

/// Parses a path identifier. Anything that is not a positive integer is
/// reported as an unknown user.
fn parse_id(id: &str) -> Result<i64, AppError> {
    id.parse::<i64>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| user_not_found(json!({ "id": id })))
}

fn user_not_found(details: serde_json::Value) -> AppError {
    AppError::not_found(USER_NOT_FOUND, details)
}

fn log_conflict(error: &AppError, name: &str) {
    if matches!(error, AppError::Conflict { .. }) {
        tracing::warn!(name, "User name already taken");
    }
}
