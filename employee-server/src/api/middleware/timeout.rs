//! 请求超时中间件
//!
//! 超过期限的请求被放弃，返回 408 和统一的 JSON 错误体

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::utils::AppError;

/// Abandon the inner service once `limit` elapses
pub async fn timeout_middleware(
    State(limit): State<Duration>,
    req: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(response) => response,
        Err(_) => AppError::RequestTimeout(limit).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware::from_fn_with_state, routing::get};
    use http::{StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(limit: Duration) -> Router {
        Router::new()
            .route("/stalled", get(|| std::future::pending::<()>()))
            .route("/quick", get(|| async { "done" }))
            .layer(from_fn_with_state(limit, timeout_middleware))
    }

    #[tokio::test]
    async fn stalled_request_gets_json_408() {
        let request = http::Request::get("/stalled").body(Body::empty()).unwrap();
        let response = app(Duration::from_millis(20)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Request timed out");
    }

    #[tokio::test]
    async fn fast_request_passes_through() {
        let request = http::Request::get("/quick").body(Body::empty()).unwrap();
        let response = app(Duration::from_secs(5)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
