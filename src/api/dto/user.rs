//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// Request body for create and rename operations.
///
/// `name` is optional at the parsing level so a missing field is reported
/// with the operation's own message instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct UserNameBody {
    pub name: Option<String>,
}

/// Query parameters for `GET /users`.
///
/// When `name` is present the request is a lookup by name; otherwise it
/// lists every user.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub name: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

/// Query parameters for `PUT /users`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateByNameQuery {
    #[serde(rename = "oldName")]
    pub old_name: Option<String>,
}

/// Query parameters for `DELETE /users`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteByNameQuery {
    pub name: Option<String>,
}

/// Response for `GET /users`: a single user for lookups by name, a list
/// otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserLookupResponse {
    One(UserItem),
    Many(Vec<UserItem>),
}

/// Confirmation returned after a user is deleted.
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub deleted_user: UserItem,
}

impl DeleteUserResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: "User deleted successfully".to_string(),
            deleted_user: user.into(),
        }
    }
}
