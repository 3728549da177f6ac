mod support;

use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use workitems_gateway::infrastructure::auth::jwt::JwtService;
use workitems_gateway::interface::http;

const UNUSED_REMOTE: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn given_non_empty_credentials_when_requesting_token_should_issue_bearer_for_username() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state.clone())
        .oneshot(support::json_request(
            "POST",
            "/api/auth/token",
            None,
            r#"{"username":"alice","password":"anything"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = support::response_json(response).await;
    assert_eq!(json["success"], Value::Bool(true));
    assert!(json["expiration"].as_str().is_some_and(|e| !e.is_empty()));
    let token = json["token"].as_str().unwrap();
    let claims = state.ctx.tokens.verify(token).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.name, "alice");
}

#[tokio::test]
async fn given_empty_password_when_requesting_token_should_return_unauthorized() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state)
        .oneshot(support::json_request(
            "POST",
            "/api/auth/token",
            None,
            r#"{"username":"alice","password":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(
        json,
        json!({"success": false, "message": "invalid credentials"})
    );
}

#[tokio::test]
async fn given_missing_username_when_requesting_token_should_return_unauthorized() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state)
        .oneshot(support::json_request(
            "POST",
            "/api/auth/token",
            None,
            r#"{"password":"pw"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_malformed_json_when_requesting_token_should_return_bad_request() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state)
        .oneshot(support::json_request(
            "POST",
            "/api/auth/token",
            None,
            r#"{"username":"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = support::response_json(response).await;
    assert_eq!(json["success"], Value::Bool(false));
}

#[tokio::test]
async fn given_missing_auth_when_accessing_work_items_should_return_unauthorized() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state)
        .oneshot(support::json_request(
            "POST",
            "/api/workitems",
            None,
            r#"{"title":"Fix bug"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = support::response_json(response).await;
    assert_eq!(json["success"], Value::Bool(false));
}

#[tokio::test]
async fn given_garbage_token_when_accessing_work_items_should_return_unauthorized() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state)
        .oneshot(support::json_request(
            "POST",
            "/api/workitems",
            Some("not-a-jwt"),
            r#"{"title":"Fix bug"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_token_signed_with_other_key_when_accessing_work_items_should_return_unauthorized() {
    let state = support::state_for(UNUSED_REMOTE);
    let mut foreign = support::settings(UNUSED_REMOTE).jwt;
    foreign.key = "a-different-key-that-the-gateway-never-saw".to_string();
    let forged = JwtService::new(&foreign).issue("mallory").unwrap();

    let response = http::app(state)
        .oneshot(support::json_request(
            "PUT",
            "/api/workitems/7",
            Some(&forged.token),
            r#"{"id":7,"title":"Renamed"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_unknown_path_without_token_when_requested_should_return_not_found() {
    let state = support::state_for(UNUSED_REMOTE);

    let response = http::app(state)
        .oneshot(support::json_request(
            "GET",
            "/api/does-not-exist",
            None,
            "",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
