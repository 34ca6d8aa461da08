//! Users API integration tests
//!
//! Registration, login and the current-user endpoint, plus the routes
//! that sit outside any module.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use contacts_api::backend::auth::Claim;

use crate::common::{
    auth_header, create_test_server, create_test_user, login_token, register_user, test_tokens,
    TEST_PASSWORD,
};

#[tokio::test]
async fn test_welcome() {
    let server = create_test_server();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Welcome to the Contacts API");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = create_test_server();
    crate::assert_error_msg!(server.get("/nowhere").await, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server();
    let response = server
        .post("/users/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": TEST_PASSWORD,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Registration is Success");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@x.com");
    assert_eq!(body["user"]["isAdmin"], false);
    assert_eq!(body["user"]["isSuperAdmin"], false);
    assert!(body["user"]["_id"].is_string());

    let image_url = body["user"]["imageUrl"].as_str().unwrap();
    crate::assert_contains!(image_url, "gravatar.com/avatar/");

    let raw = body.to_string();
    assert!(!raw.contains(TEST_PASSWORD));
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = create_test_server();
    register_user(&server, "alice", "alice@x.com").await;

    let response = server
        .post("/users/register")
        .json(&json!({
            "username": "alice2",
            "email": "alice@x.com",
            "password": TEST_PASSWORD,
        }))
        .await;
    crate::assert_error_msg!(response, StatusCode::UNAUTHORIZED, "User already exists");
}

#[tokio::test]
async fn test_register_validation() {
    let server = create_test_server();
    let response = server
        .post("/users/register")
        .json(&json!({ "username": "al", "email": "nope", "password": "password" }))
        .await;
    crate::assert_validation_fields!(response, ["username", "email", "password"]);
}

#[tokio::test]
async fn test_register_missing_body_fields() {
    let server = create_test_server();
    let response = server.post("/users/register").json(&json!({})).await;
    crate::assert_validation_fields!(response, ["username", "email", "password"]);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = create_test_server();
    let response = server
        .post("/users/register")
        .text("{not json")
        .content_type("application/json")
        .await;
    crate::assert_validation_fields!(response, ["body"]);
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server();
    let registered = register_user(&server, "alice", "alice@x.com").await;

    let response = server
        .post("/users/login")
        .json(&json!({ "email": "alice@x.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Login is Success");
    assert_eq!(body["user"]["_id"], registered["user"]["_id"]);

    let claim = test_tokens().verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claim.email, "alice@x.com");
    assert_eq!(claim.user_id.to_string(), registered["user"]["_id"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_server();
    register_user(&server, "alice", "alice@x.com").await;

    let response = server
        .post("/users/login")
        .json(&json!({ "email": "alice@x.com", "password": "Wr0ng!Pass" }))
        .await;
    crate::assert_error_msg!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let server = create_test_server();
    let response = server
        .post("/users/login")
        .json(&json!({ "email": "ghost@x.com", "password": TEST_PASSWORD }))
        .await;
    crate::assert_error_msg!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_validation() {
    let server = create_test_server();
    let response = server
        .post("/users/login")
        .json(&json!({ "email": "alice", "password": TEST_PASSWORD }))
        .await;
    crate::assert_validation_fields!(response, ["email"]);
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let server = create_test_server();
    let user = create_test_user(&server, "alice", "alice@x.com").await;
    let (name, value) = auth_header(&user.token);

    let response = server.get("/users/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["_id"], user.id);
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_me_accepts_bearer_header() {
    let server = create_test_server();
    register_user(&server, "alice", "alice@x.com").await;
    let token = login_token(&server, "alice@x.com").await;

    let response = server
        .get("/users/me")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_me_without_token() {
    let server = create_test_server();
    crate::assert_error_msg!(
        server.get("/users/me").await,
        StatusCode::UNAUTHORIZED,
        "No token provided"
    );
}

#[tokio::test]
async fn test_me_with_invalid_token() {
    let server = create_test_server();
    let (name, value) = auth_header("not.a.token");
    crate::assert_error_msg!(
        server.get("/users/me").add_header(name, value).await,
        StatusCode::UNAUTHORIZED,
        "Invalid token provided"
    );
}

#[tokio::test]
async fn test_me_for_unknown_user() {
    let server = create_test_server();
    let token = test_tokens()
        .issue(&Claim {
            user_id: Uuid::new_v4(),
            email: "ghost@x.com".to_string(),
        })
        .unwrap();
    let (name, value) = auth_header(&token);

    crate::assert_error_msg!(
        server.get("/users/me").add_header(name, value).await,
        StatusCode::NOT_FOUND,
        "No user found"
    );
}
