//! Shared helpers: in-memory store and oneshot request driver

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use employee_server::db::DbService;
use employee_server::{Config, ServerState, api};

/// Fresh state over an empty in-memory store
pub async fn state() -> ServerState {
    ServerState::initialize(&Config::for_store("mem://"))
        .await
        .expect("in-memory store should connect")
}

pub async fn app() -> Router {
    api::app(state().await)
}

/// State over a connected store with no namespace selected; every query fails
pub async fn failing_state() -> ServerState {
    let db = surrealdb::engine::any::connect("mem://")
        .await
        .expect("in-memory store should connect");
    ServerState::with_db(Config::for_store("mem://"), DbService { db })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST an employee and return the assigned id
pub async fn create(app: &Router, body: &str) -> String {
    let response = send(app, Method::POST, "/api/employees", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["id"].as_str().unwrap().to_string()
}
