mod common;

use auth::JwtHandler;
use common::TestApp;
use common::JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;

async fn register(app: &TestApp, login: &str, password: &str) -> reqwest::Response {
    app.post("/auth/register")
        .json(&json!({ "login": login, "password": password }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn login(app: &TestApp, login: &str, password: &str) -> reqwest::Response {
    app.post("/auth/login")
        .json(&json!({ "login": login, "password": password }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_ping() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Ping! Pong!");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = register(&app, "alice", "secret1").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["login"], "alice");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());

    // Nothing password-shaped in the response
    assert!(body["data"]["password"].is_null());
    assert!(body["data"]["password_hash"].is_null());
}

#[tokio::test]
async fn test_register_missing_login() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({ "password": "secret1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Login is required");
}

#[tokio::test]
async fn test_register_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({ "login": "alice" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Password is required");
}

#[tokio::test]
async fn test_register_duplicate_login() {
    let app = TestApp::spawn().await;

    let first = register(&app, "alice", "secret1").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = register(&app, "alice", "another_password").await;
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = second.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_duplicate_login_concurrent() {
    let app = TestApp::spawn().await;

    // The unique constraint, not a pre-read, arbitrates the race
    let (first, second) = tokio::join!(
        register(&app, "alice", "secret1"),
        register(&app, "alice", "secret1"),
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort();

    assert_eq!(
        statuses,
        [StatusCode::CREATED, StatusCode::UNPROCESSABLE_ENTITY]
    );
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let created = register(&app, "alice", "secret1").await;
    let created_body: serde_json::Value = created.json().await.expect("Failed to parse response");
    let account_id = created_body["data"]["id"].as_str().unwrap().to_string();

    let response = login(&app, "alice", "secret1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("Token missing");
    assert!(!token.is_empty());

    // The token's verified subject is the created account's identifier
    let subject = app.jwt_handler.verify(token).expect("Token did not verify");
    assert_eq!(subject, account_id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    register(&app, "alice", "secret1").await;

    let response = login(&app, "alice", "wrong").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_unknown_account() {
    let app = TestApp::spawn().await;

    let response = login(&app, "nobody", "secret1").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/login")
        .json(&json!({ "login": "alice" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_account_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/user/00000000-0000-0000-0000-000000000000")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_account_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/user/00000000-0000-0000-0000-000000000000", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_account_with_wrong_signature_token() {
    let app = TestApp::spawn().await;

    let created = register(&app, "alice", "secret1").await;
    let created_body: serde_json::Value = created.json().await.expect("Failed to parse response");
    let account_id = created_body["data"]["id"].as_str().unwrap();

    // Well-formed token, signed with somebody else's secret
    let foreign = JwtHandler::new(b"some-other-secret-also-32-bytes-long!!", 24);
    let token = foreign.issue(account_id).expect("Failed to issue token");

    let response = app
        .get_authenticated(&format!("/user/{}", account_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_account_with_expired_token() {
    let app = TestApp::spawn().await;

    let created = register(&app, "alice", "secret1").await;
    let created_body: serde_json::Value = created.json().await.expect("Failed to parse response");
    let account_id = created_body["data"]["id"].as_str().unwrap();

    // Right secret, expiry already in the past
    let expired_issuer = JwtHandler::new(JWT_SECRET, -1);
    let token = expired_issuer.issue(account_id).expect("Failed to issue token");

    let response = app
        .get_authenticated(&format!("/user/{}", account_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_account_success_excludes_password() {
    let app = TestApp::spawn().await;

    register(&app, "alice", "secret1").await;

    let response = login(&app, "alice", "secret1").await;
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let subject = app.jwt_handler.verify(&token).expect("Token did not verify");

    let response = app
        .get_authenticated(&format!("/user/{}", subject), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], subject);
    assert_eq!(body["data"]["login"], "alice");
    assert!(body["data"]["password"].is_null());
    assert!(body["data"]["password_hash"].is_null());
}

#[tokio::test]
async fn test_get_account_unknown_id() {
    let app = TestApp::spawn().await;

    register(&app, "alice", "secret1").await;

    let response = login(&app, "alice", "secret1").await;
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // Valid token for an account that does not exist: an ordinary 404
    let response = app
        .get_authenticated(&format!("/user/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_account_unparseable_id() {
    let app = TestApp::spawn().await;

    register(&app, "alice", "secret1").await;

    let response = login(&app, "alice", "secret1").await;
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .get_authenticated("/user/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_login_scenario() {
    let app = TestApp::spawn().await;

    let response = register(&app, "alice", "secret1").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = login(&app, "alice", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["token"].is_string());

    let response = login(&app, "alice", "wrong").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = register(&app, "alice", "secret1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
