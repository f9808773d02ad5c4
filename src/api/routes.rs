//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_by_name_handler, delete_user_handler, get_user_handler,
    list_users_handler, update_user_by_name_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User resource routes.
///
/// # Endpoints
///
/// - `POST   /users`             - Create a user
/// - `GET    /users?name=`       - Look up a user by name
/// - `GET    /users?sortBy=&sortOrder=` - List all users
/// - `PUT    /users?oldName=`    - Rename a user by current name
/// - `DELETE /users?name=`       - Delete a user by name
/// - `GET    /users/{id}`        - Look up a user by id
/// - `PUT    /users/{id}`        - Rename a user by id
/// - `DELETE /users/{id}`        - Delete a user by id
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users_handler)
                .post(create_user_handler)
                .put(update_user_by_name_handler)
                .delete(delete_user_by_name_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}
