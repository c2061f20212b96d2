//! HTTP API
//!
//! - [`employees`] - 员工 CRUD
//! - [`health`] - 存储健康检查
//! - [`extract`] - 请求体提取器
//! - [`middleware`] - 请求日志与超时

pub mod employees;
pub mod extract;
pub mod health;
pub mod middleware;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, StatusCode, Uri};
use axum::{Json, Router, middleware as axum_middleware};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{AppError, MessageResponse, message};

const BODY_LIMIT: usize = 1024 * 1024;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
        .fallback(no_route)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(axum_middleware::from_fn_with_state(
            state.config.request_timeout(),
            middleware::timeout_middleware,
        ))
        // Request logging - reads the request ID set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}

/// Application with state applied, ready to serve
pub fn app(state: ServerState) -> Router {
    build_app(&state).with_state(state)
}

async fn no_route(uri: Uri) -> AppError {
    AppError::NoRoute(uri.path().to_string())
}

async fn method_not_allowed() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::METHOD_NOT_ALLOWED, message("Method not allowed"))
}
