//! Handler tests for the users domain
//!
//! These tests drive the domain router over HTTP and cover:
//! - request deserialization and validation
//! - response serialization, status codes and the camelCase wire shape
//! - the single-field error body

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::{CreateUser, InMemoryUserRepository, User, UserService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn app() -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    handlers::router(service)
}

/// Router plus a handle on the service backing it, for seeding data
fn app_with_service() -> (Router, UserService<InMemoryUserRepository>) {
    let service = UserService::new(InMemoryUserRepository::new());
    (handlers::router(service.clone()), service)
}

async fn seed_user(service: &UserService<InMemoryUserRepository>, username: &str) -> User {
    service
        .create_user(CreateUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            role: "user".to_string(),
        })
        .await
        .unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_user_handler_returns_201() {
    let app = app();

    let payload = json!({
        "username": "alice",
        "email": "alice@example.com",
        "role": "admin"
    });
    let response = app.oneshot(post_json("/", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["role"], "admin");
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    // Timestamps are camelCase on the wire and equal on creation
    assert_eq!(body["createdDate"], body["updatedDate"]);
    assert!(body.get("created_date").is_none());
}

#[tokio::test]
async fn test_create_user_handler_rejects_duplicate_username() {
    let app = app();

    let first = json!({"username": "alice", "email": "alice@example.com", "role": "admin"});
    let response = app.clone().oneshot(post_json("/", &first)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same username, different email and role
    let second = json!({"username": "alice", "email": "other@example.com", "role": "user"});
    let response = app.oneshot(post_json("/", &second)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "Username already exists"}));
}

#[tokio::test]
async fn test_create_user_handler_requires_all_fields() {
    let app = app();

    let missing_role = json!({"username": "alice", "email": "alice@example.com"});
    let response = app
        .clone()
        .oneshot(post_json("/", &missing_role))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"message": "Please provide username, email, and role"})
    );

    // An empty object fails the same way
    let response = app.oneshot(post_json("/", &json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_handler_rejects_empty_strings() {
    let app = app();

    let payload = json!({"username": "", "email": "alice@example.com", "role": "admin"});
    let response = app.oneshot(post_json("/", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Please provide username, email, and role");
}

#[tokio::test]
async fn test_get_user_handler_returns_200() {
    let (app, service) = app_with_service();
    let created = seed_user(&service, "alice").await;

    let response = app
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: User = json_body(response.into_body()).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.username, created.username);
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.role, created.role);
    assert_eq!(fetched.created_date, created.created_date);
}

#[tokio::test]
async fn test_get_user_handler_returns_404() {
    let app = app();

    let response = app
        .oneshot(get(&format!("/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_get_user_handler_rejects_malformed_id() {
    let app = app();

    let response = app.oneshot(get("/definitely-not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid UUID"));
}

#[tokio::test]
async fn test_get_user_by_username_handler_returns_200() {
    let (app, service) = app_with_service();
    let created = seed_user(&service, "alice").await;

    let response = app.oneshot(get("/username/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: User = json_body(response.into_body()).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.username, "alice");
}

#[tokio::test]
async fn test_get_user_by_username_handler_returns_404() {
    let app = app();

    let response = app.oneshot(get("/username/ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_list_users_handler_returns_empty_array() {
    let app = app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_users_handler_preserves_insertion_order() {
    let (app, service) = app_with_service();
    seed_user(&service, "a").await;
    let b = seed_user(&service, "b").await;
    seed_user(&service, "c").await;

    // Delete the middle record through the handler
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", b.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/")).await.unwrap();
    let users: Vec<User> = json_body(response.into_body()).await;
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[tokio::test]
async fn test_update_user_handler_applies_partial_update() {
    let (app, service) = app_with_service();
    let created = seed_user(&service, "alice").await;

    // Make sure the clock moves between creation and update
    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = app
        .oneshot(put_json(
            &format!("/{}", created.id),
            &json!({"role": "manager"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.username, "alice");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.role, "manager");
    assert_eq!(updated.created_date, created.created_date);
    assert!(updated.updated_date > created.updated_date);
}

#[tokio::test]
async fn test_update_user_handler_keeps_empty_string_fields() {
    let (app, service) = app_with_service();
    let created = seed_user(&service, "alice").await;

    let response = app
        .oneshot(put_json(
            &format!("/{}", created.id),
            &json!({"email": "", "role": "ops"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.email, "alice@example.com");
    assert_eq!(updated.role, "ops");
}

#[tokio::test]
async fn test_update_user_handler_refreshes_timestamp_on_empty_body() {
    let (app, service) = app_with_service();
    let created = seed_user(&service, "alice").await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = app
        .oneshot(put_json(&format!("/{}", created.id), &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.username, "alice");
    assert!(updated.updated_date > created.updated_date);
}

#[tokio::test]
async fn test_update_user_handler_returns_404() {
    let app = app();

    let response = app
        .oneshot(put_json(
            &format!("/{}", Uuid::new_v4()),
            &json!({"role": "manager"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_update_user_handler_allows_duplicate_username() {
    let (app, service) = app_with_service();
    seed_user(&service, "alice").await;
    let bob = seed_user(&service, "bob").await;

    // Uniqueness is only enforced on creation
    let response = app
        .oneshot(put_json(
            &format!("/{}", bob.id),
            &json!({"username": "alice"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.username, "alice");
}

#[tokio::test]
async fn test_delete_user_handler_returns_204_then_404() {
    let (app, service) = app_with_service();
    let created = seed_user(&service, "alice").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_handler_returns_404_for_missing() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "User not found"}));
}
