#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use user_service::AppError;
use user_service::domain::entities::{NewUser, User, UserSort};
use user_service::domain::repositories::UserRepository;
use user_service::infrastructure::persistence::MemoryUserRepository;
use user_service::routes::router;
use user_service::state::AppState;

/// Store whose every call fails, for exercising 5xx paths.
pub struct FailingUserRepository;

fn store_down() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
        Err(store_down())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<User>, AppError> {
        Err(store_down())
    }

    async fn list(&self, _sort: UserSort) -> Result<Vec<User>, AppError> {
        Err(store_down())
    }

    async fn update_name_by_id(
        &self,
        _id: i64,
        _new_name: &str,
    ) -> Result<Option<User>, AppError> {
        Err(store_down())
    }

    async fn update_name_by_name(
        &self,
        _old_name: &str,
        _new_name: &str,
    ) -> Result<Option<User>, AppError> {
        Err(store_down())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
        Err(store_down())
    }

    async fn delete_by_name(&self, _name: &str) -> Result<Option<User>, AppError> {
        Err(store_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(store_down())
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryUserRepository>) {
    let repo = Arc::new(MemoryUserRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

pub fn make_server() -> TestServer {
    let (state, _repo) = create_test_state();
    TestServer::new(router(state)).unwrap()
}

pub fn make_failing_server() -> TestServer {
    let state = AppState::new(Arc::new(FailingUserRepository));
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_user(server: &TestServer, name: &str) -> i64 {
    let response = server.post("/users").json(&json!({ "name": name })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}
