/// HTTP tests for the /api routes
/// Drive the full router (middleware included) against in-process stores
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use userboard_server::{
    config::Config,
    models::{NewUser, User},
    routes::create_routes,
    state::AppState,
    store::{MemoryUserStore, StoreError, UserStore},
};

/// A store whose backend is unreachable
struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> bool {
        false
    }
}

fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

fn create_test_app(store: Arc<dyn UserStore>) -> Router {
    create_routes(AppState::new(store), &test_config())
}

fn memory_app() -> Router {
    create_test_app(Arc::new(MemoryUserStore::new()))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/users",
            &json!({ "name": name, "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_hello_returns_greeting() {
    let response = memory_app().oneshot(get("/api/hello")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(!message.is_empty());
    assert_eq!(message, "Hello from backend!");
}

#[tokio::test]
async fn test_hello_succeeds_without_store() {
    let app = create_test_app(Arc::new(FailingStore));
    let response = app.oneshot(get("/api/hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_users_empty() {
    let response = memory_app().oneshot(get("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_user_returns_created_record() {
    let app = memory_app();
    let user = create(&app, "Ada Lovelace", "ada@example.com").await;

    assert_eq!(user["name"], "Ada Lovelace");
    assert_eq!(user["email"], "ada@example.com");
    assert!(!user["_id"].as_str().unwrap().is_empty());
    let created_at = user["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_create_user_missing_name() {
    let response = memory_app()
        .oneshot(post_json(
            "/api/users",
            &json!({ "email": "ada@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("name is required"));
}

#[tokio::test]
async fn test_create_user_missing_email() {
    let response = memory_app()
        .oneshot(post_json("/api/users", &json!({ "name": "Ada" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("email is required"));
}

#[tokio::test]
async fn test_create_user_blank_fields_rejected() {
    let response = memory_app()
        .oneshot(post_json(
            "/api/users",
            &json!({ "name": "  ", "email": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let request = Request::builder()
        .uri("/api/users")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = memory_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_rejected_user_is_not_stored() {
    let app = memory_app();
    let response = app
        .clone()
        .oneshot(post_json("/api/users", &json!({ "name": "Ada" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_after_two_creates() {
    let app = memory_app();
    let ada = create(&app, "Ada", "ada@example.com").await;
    let grace = create(&app, "Grace", "grace@example.com").await;

    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users = body_json(response).await;
    let users = users.as_array().unwrap();
    assert!(users.len() >= 2);
    assert!(users.contains(&ada));
    assert!(users.contains(&grace));
    assert_ne!(ada["_id"], grace["_id"]);
}

#[tokio::test]
async fn test_list_is_in_insertion_order() {
    let app = memory_app();
    create(&app, "First", "first@example.com").await;
    create(&app, "Second", "second@example.com").await;

    let response = app.oneshot(get("/api/users")).await.unwrap();
    let users = body_json(response).await;
    assert_eq!(users[0]["name"], "First");
    assert_eq!(users[1]["name"], "Second");
}

#[tokio::test]
async fn test_repeated_list_is_stable() {
    let app = memory_app();
    create(&app, "Ada", "ada@example.com").await;

    let first = body_json(app.clone().oneshot(get("/api/users")).await.unwrap()).await;
    let second = body_json(app.oneshot(get("/api/users")).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_users_store_failure() {
    let app = create_test_app(Arc::new(FailingStore));
    let response = app.oneshot(get("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("pool timed out"));
}

#[tokio::test]
async fn test_create_user_store_failure() {
    let app = create_test_app(Arc::new(FailingStore));
    let response = app
        .oneshot(post_json(
            "/api/users",
            &json!({ "name": "Ada", "email": "ada@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("pool timed out"));
}

#[tokio::test]
async fn test_health_connected() {
    let response = memory_app().oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "connected");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_disconnected() {
    let app = create_test_app(Arc::new(FailingStore));
    let response = app.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = memory_app().oneshot(get("/api/hello")).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.get("strict-transport-security").is_none());
}

#[tokio::test]
async fn test_hsts_in_production() {
    let config = Config::from_lookup(|key| (key == "RUST_ENV").then(|| "production".to_string()))
        .unwrap();
    let app = create_routes(AppState::new(Arc::new(MemoryUserStore::new())), &config);

    let response = app.oneshot(get("/api/hello")).await.unwrap();
    assert!(response.headers().get("strict-transport-security").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let request = Request::builder()
        .uri("/api/hello")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = memory_app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = memory_app().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
