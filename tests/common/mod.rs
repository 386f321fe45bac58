//! Common test utilities and helpers
//!
//! - An in-memory app (no database) and its state
//! - Access token helpers
//! - Request helpers around `tower::ServiceExt::oneshot`
//! - PostgreSQL fixtures (`database`)

#![allow(dead_code)]

pub mod database;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use eatery_reviews::backend::routes::create_router;
use eatery_reviews::backend::server::state::AppState;
use eatery_reviews::shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .build()
        .expect("test config is valid")
}

/// Router over an in-memory state, plus the state for direct inspection
pub fn test_app() -> (Router, AppState) {
    let state = AppState::in_memory(test_config());
    (create_router(state.clone()), state)
}

/// Test member with a valid access token
pub struct TestMember {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

pub fn test_member(state: &AppState) -> TestMember {
    let id = Uuid::new_v4();
    let email = format!("member_{}@example.com", id.simple());
    let token = state
        .tokens
        .create_access_token(id, &email)
        .expect("Failed to create test token");
    TestMember { id, email, token }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Send a request and decode the body as JSON (`Value::Null` when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

/// Ids of a JSON comment list, in order
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|c| c["id"].as_i64().expect("comment id"))
        .collect()
}
