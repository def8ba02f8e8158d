use std::collections::BTreeMap;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value as DbValue};
use serde_json::{Value, json};

use nikufam_api::infra::cache;
use nikufam_api_schema::users;
use nikufam_api::router::build_router;
use nikufam_api::state::AppState;

/// Router wired to stores that cannot be reached: a disconnected database handle and
/// a Redis pool pointing at a closed port. Requests that fail validation never reach
/// either store; the rest exercise the store-failure path.
fn unreachable_server() -> TestServer {
    server_with_db(DatabaseConnection::Disconnected)
}

fn server_with_db(db: DatabaseConnection) -> TestServer {
    let state = AppState {
        db,
        redis: cache::create_pool("redis://127.0.0.1:1").unwrap(),
        store_timeout: Duration::from_millis(500),
    };
    TestServer::new(build_router(state)).unwrap()
}

/// Database answering a single `COUNT(*)` query.
fn db_counting(count: i64) -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([(
            "num_items",
            DbValue::BigInt(Some(count)),
        )])]])
        .into_connection()
}

/// Database answering a single user lookup.
fn db_with_users(rows: Vec<users::Model>) -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([rows])
        .into_connection()
}

fn alice_row() -> users::Model {
    users::Model {
        id: 1,
        username: "alice".to_owned(),
        password: "pw1".to_owned(),
        device_id: Some("dev1".to_owned()),
    }
}

#[tokio::test]
async fn should_answer_healthz_with_request_id() {
    let server = unreachable_server();
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    assert!(
        !response.header("x-request-id").is_empty(),
        "response should carry a request id"
    );
}

#[tokio::test]
async fn should_reject_access_code_request_with_missing_fields() {
    let server = unreachable_server();

    for path in ["/store-access-code", "/verify-access-code"] {
        let response = server.post(path).json(&json!({ "username": "alice" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["kind"], "VALIDATION_ERROR");
        assert_eq!(body["error"], "Access code and username are required");
    }
}

#[tokio::test]
async fn should_hide_redis_failure_behind_generic_500() {
    let server = unreachable_server();
    let response = server
        .post("/store-access-code")
        .json(&json!({ "username": "alice", "accessCode": "123456" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "STORE_UNAVAILABLE");
    assert_eq!(body["error"], "Internal server error");
    assert!(
        !response.text().contains("127.0.0.1"),
        "store details must not leak"
    );
}

#[tokio::test]
async fn should_reject_verify_password_without_username() {
    let server = unreachable_server();
    let response = server
        .post("/api/verify-password")
        .json(&json!({ "password": "pw1", "deviceId": "dev1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username is required");
}

#[tokio::test]
async fn should_reject_post_without_title() {
    let server = unreachable_server();
    let response = server
        .post("/api/posts")
        .json(&json!({ "content": "Body only" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Title and content are required");
}

#[tokio::test]
async fn should_return_500_when_database_is_down() {
    let server = unreachable_server();
    let response = server.get("/api/posts").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn should_report_not_ready_when_stores_are_down() {
    let server = unreachable_server();
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_request_without_json_body() {
    let server = unreachable_server();
    for path in [
        "/store-access-code",
        "/verify-access-code",
        "/api/verify-password",
        "/api/check-username",
        "/api/posts",
    ] {
        let response = server.post(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["kind"], "VALIDATION_ERROR", "path {path}");
    }
}

#[tokio::test]
async fn should_reject_non_string_field_without_echoing_parser_detail() {
    let server = unreachable_server();
    let response = server
        .post("/store-access-code")
        .json(&json!({ "username": "alice", "accessCode": 123456 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_ERROR");
    assert!(
        !response.text().contains("invalid type"),
        "deserializer detail must not leak"
    );
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let server = unreachable_server();
    let response = server
        .post("/verify-access-code")
        .bytes("{\"username\": \"alice\",".into())
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn should_answer_200_for_existing_username() {
    let server = server_with_db(db_counting(1));
    let response = server
        .post("/api/check-username")
        .json(&json!({ "username": "alice" }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "exists": true }));
}

#[tokio::test]
async fn should_answer_404_with_exists_false_for_unknown_username() {
    let server = server_with_db(db_counting(0));
    let response = server
        .post("/api/check-username")
        .json(&json!({ "username": "nobody" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "exists": false }));
}

#[tokio::test]
async fn should_verify_password_for_matching_device() {
    let server = server_with_db(db_with_users(vec![alice_row()]));
    let response = server
        .post("/api/verify-password")
        .json(&json!({ "username": "alice", "password": "pw1", "deviceId": "dev1" }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "success": true,
        "message": "Password verified successfully",
    }));
}

#[tokio::test]
async fn should_return_401_for_wrong_device() {
    let server = server_with_db(db_with_users(vec![alice_row()]));
    let response = server
        .post("/api/verify-password")
        .json(&json!({ "username": "alice", "password": "pw1", "deviceId": "dev2" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_CREDENTIAL");
    assert_eq!(body["error"], "Invalid password or device ID");
}

#[tokio::test]
async fn should_return_404_for_unknown_user_on_verify_password() {
    let server = server_with_db(db_with_users(vec![]));
    let response = server
        .post("/api/verify-password")
        .json(&json!({ "username": "nobody", "password": "pw1", "deviceId": "dev1" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "USER_NOT_FOUND");
}
