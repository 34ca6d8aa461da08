//! Contacts API integration tests
//!
//! Owner-scoped CRUD over `/contacts`.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{auth_header, contact_body, create_test_server, create_test_user, TestUser};

async fn create_contact(server: &axum_test::TestServer, user: &TestUser, name: &str, mobile: &str) -> Value {
    let (header, value) = auth_header(&user.token);
    let response = server
        .post("/contacts")
        .add_header(header, value)
        .json(&contact_body(name, mobile))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_contact() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;

    let contact = create_contact(&server, &alice, "Carol", "5550001").await;
    assert_eq!(contact["name"], "Carol");
    assert_eq!(contact["mobile"], "5550001");
    assert_eq!(contact["groupId"], "friends");
    assert_eq!(contact["user"], alice.id);
    assert!(contact["_id"].is_string());
    assert!(contact["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_requires_token() {
    let server = create_test_server();
    crate::assert_error_msg!(
        server.post("/contacts").json(&contact_body("Carol", "5550001")).await,
        StatusCode::UNAUTHORIZED,
        "No token provided"
    );
}

#[tokio::test]
async fn test_create_validation_lists_every_field() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let (header, value) = auth_header(&alice.token);

    let response = server
        .post("/contacts")
        .add_header(header, value)
        .json(&json!({ "name": "Carol" }))
        .await;
    crate::assert_validation_fields!(
        response,
        ["imageUrl", "email", "mobile", "company", "title", "groupId"]
    );
}

#[tokio::test]
async fn test_duplicate_mobile_across_users() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let bobby = create_test_user(&server, "bobby", "bobby@x.com").await;
    create_contact(&server, &alice, "Carol", "5550001").await;

    let (header, value) = auth_header(&bobby.token);
    let response = server
        .post("/contacts")
        .add_header(header, value)
        .json(&contact_body("Dave", "5550001"))
        .await;
    crate::assert_error_msg!(
        response,
        StatusCode::UNAUTHORIZED,
        "Contact already exists with this mobile number"
    );
}

#[tokio::test]
async fn test_list_is_newest_first_and_scoped() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let bobby = create_test_user(&server, "bobby", "bobby@x.com").await;

    let first = create_contact(&server, &alice, "Carol", "5550001").await;
    let second = create_contact(&server, &alice, "Dave", "5550002").await;
    create_contact(&server, &bobby, "Erin", "5550003").await;
    let third = create_contact(&server, &alice, "Frank", "5550004").await;

    let (header, value) = auth_header(&alice.token);
    let response = server.get("/contacts").add_header(header, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listed: Vec<Value> = response.json();
    let ids: Vec<&Value> = listed.iter().map(|c| &c["_id"]).collect();
    pretty_assertions::assert_eq!(ids, vec![&third["_id"], &second["_id"], &first["_id"]]);
}

#[tokio::test]
async fn test_get_contact() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let contact = create_contact(&server, &alice, "Carol", "5550001").await;

    let (header, value) = auth_header(&alice.token);
    let response = server
        .get(&format!("/contacts/{}", contact["_id"].as_str().unwrap()))
        .add_header(header, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), contact);
}

#[tokio::test]
async fn test_other_users_contact_is_not_found() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let bobby = create_test_user(&server, "bobby", "bobby@x.com").await;
    let contact = create_contact(&server, &alice, "Carol", "5550001").await;
    let path = format!("/contacts/{}", contact["_id"].as_str().unwrap());

    let (header, value) = auth_header(&bobby.token);
    crate::assert_error_msg!(
        server.get(&path).add_header(header.clone(), value.clone()).await,
        StatusCode::NOT_FOUND,
        "The Contact is not found"
    );
    crate::assert_error_msg!(
        server
            .put(&path)
            .add_header(header.clone(), value.clone())
            .json(&contact_body("Mallory", "5550009"))
            .await,
        StatusCode::NOT_FOUND,
        "The Contact is not found"
    );
    crate::assert_error_msg!(
        server.delete(&path).add_header(header, value).await,
        StatusCode::NOT_FOUND,
        "The Contact is not found"
    );

    let (header, value) = auth_header(&alice.token);
    let response = server.get(&path).add_header(header, value).await;
    assert_eq!(response.json::<Value>()["name"], "Carol");
}

#[tokio::test]
async fn test_malformed_id_is_not_found() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let (header, value) = auth_header(&alice.token);

    crate::assert_error_msg!(
        server.get("/contacts/not-an-id").add_header(header, value).await,
        StatusCode::NOT_FOUND,
        "The Contact is not found"
    );
}

#[tokio::test]
async fn test_update_contact() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let contact = create_contact(&server, &alice, "Carol", "5550001").await;

    let (header, value) = auth_header(&alice.token);
    let response = server
        .put(&format!("/contacts/{}", contact["_id"].as_str().unwrap()))
        .add_header(header, value)
        .json(&contact_body("Caroline", "5550002"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["_id"], contact["_id"]);
    assert_eq!(updated["name"], "Caroline");
    assert_eq!(updated["mobile"], "5550002");
    assert_eq!(updated["createdAt"], contact["createdAt"]);
}

#[tokio::test]
async fn test_update_validation() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let contact = create_contact(&server, &alice, "Carol", "5550001").await;

    let mut body = contact_body("Carol", "5550001");
    body["title"] = json!("");

    let (header, value) = auth_header(&alice.token);
    let response = server
        .put(&format!("/contacts/{}", contact["_id"].as_str().unwrap()))
        .add_header(header, value)
        .json(&body)
        .await;
    crate::assert_validation_fields!(response, ["title"]);
}

#[tokio::test]
async fn test_delete_contact() {
    let server = create_test_server();
    let alice = create_test_user(&server, "alice", "alice@x.com").await;
    let contact = create_contact(&server, &alice, "Carol", "5550001").await;
    let path = format!("/contacts/{}", contact["_id"].as_str().unwrap());
    let (header, value) = auth_header(&alice.token);

    let response = server.delete(&path).add_header(header.clone(), value.clone()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({}));

    crate::assert_error_msg!(
        server.get(&path).add_header(header, value).await,
        StatusCode::NOT_FOUND,
        "The Contact is not found"
    );
}
