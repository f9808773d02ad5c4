//! Handlers for user endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::user::{
    DeleteByNameQuery, DeleteUserResponse, ListUsersQuery, UpdateByNameQuery, UserItem,
    UserLookupResponse, UserNameBody,
};
use crate::api::extract::{JsonBody, QueryParams, UserIdPath};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "John Doe" }
/// ```
///
/// # Errors
///
/// Returns 400 if `name` is missing or empty.
/// Returns 409 if the name is already taken.
/// Returns 500 on store errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UserNameBody>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    let user = state.user_service.create_user(body.name.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Looks up a user by name, or lists all users.
///
/// # Endpoint
///
/// `GET /users?name=...` or `GET /users?sortBy=name&sortOrder=desc`
///
/// # Query Parameters
///
/// - `name` (optional): when present, returns the single matching user
/// - `sortBy` (optional): sort field, only `name` is accepted (default: `name`)
/// - `sortOrder` (optional): `asc` (default) or `desc`
///
/// # Errors
///
/// Returns 400 if `name` is present but empty, `sortBy` is unknown, or the
/// query string cannot be decoded.
/// Returns 404 if the named user does not exist or there are no users.
pub async fn list_users_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListUsersQuery>,
) -> Result<Json<UserLookupResponse>, AppError> {
    if let Some(name) = query.name.as_deref() {
        let user = state.user_service.get_user_by_name(Some(name)).await?;
        return Ok(Json(UserLookupResponse::One(user.into())));
    }

    let users = state
        .user_service
        .list_users(query.sort_by.as_deref(), query.sort_order.as_deref())
        .await?;

    Ok(Json(UserLookupResponse::Many(
        users.into_iter().map(UserItem::from).collect(),
    )))
}

/// Retrieves a user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the id is malformed or no user has it.
pub async fn get_user_handler(
    UserIdPath(id): UserIdPath,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_user_by_id(&id).await?;

    Ok(Json(user.into()))
}

/// Renames a user identified by its current name.
///
/// # Endpoint
///
/// `PUT /users?oldName=Dave` with body `{ "name": "David" }`
///
/// # Errors
///
/// Returns 400 if `oldName` or `name` is missing.
/// Returns 404 if no user is called `oldName`.
/// Returns 409 if the new name is already taken.
pub async fn update_user_by_name_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UpdateByNameQuery>,
    JsonBody(body): JsonBody<UserNameBody>,
) -> Result<Json<UserItem>, AppError> {
    let user = state
        .user_service
        .update_user_by_name(query.old_name.as_deref(), body.name.as_deref())
        .await?;

    Ok(Json(user.into()))
}

/// Renames a user identified by id.
///
/// # Endpoint
///
/// `PUT /users/{id}` with body `{ "name": "Jonathan" }`
///
/// # Errors
///
/// Returns 400 if `name` is missing.
/// Returns 404 if the id is malformed or unknown.
/// Returns 409 if the new name is already taken.
pub async fn update_user_handler(
    UserIdPath(id): UserIdPath,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<UserNameBody>,
) -> Result<Json<UserItem>, AppError> {
    let user = state
        .user_service
        .update_user_by_id(&id, body.name.as_deref())
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user by name.
///
/// # Endpoint
///
/// `DELETE /users?name=Frank`
///
/// # Errors
///
/// Returns 400 if `name` is missing.
/// Returns 404 if no user has that name.
pub async fn delete_user_by_name_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DeleteByNameQuery>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let user = state
        .user_service
        .delete_user_by_name(query.name.as_deref())
        .await?;

    Ok(Json(DeleteUserResponse::new(user)))
}

/// Deletes a user by id.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the id is malformed or unknown.
pub async fn delete_user_handler(
    UserIdPath(id): UserIdPath,
    State(state): State<AppState>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let user = state.user_service.delete_user_by_id(&id).await?;

    Ok(Json(DeleteUserResponse::new(user)))
}
