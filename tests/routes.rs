mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use user_service::domain::entities::NewUser;
use user_service::domain::repositories::UserRepository;
use user_service::routes::app_router;

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (state, repo) = common::create_test_state();
    let user = repo
        .create(NewUser {
            name: "Alice".to_string(),
        })
        .await
        .unwrap();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri(format!("/users/{}/", user.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (state, _repo) = common::create_test_state();

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/accounts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
