//! 统一错误处理
//!
//! HTTP 边界上的错误类型：每个变体对应一个状态码，响应体统一为
//!
//! ```json
//! { "message": "Employee not found" }
//! ```
//!
//! | 变体 | 状态码 |
//! |------|--------|
//! | InvalidId | 400 |
//! | InvalidBody | 400 |
//! | NotFound | 404 |
//! | RequestTimeout | 408 |
//! | Store | 500 |

use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::StoreError;
use crate::db::models::BodyError;
use crate::db::object_id::IdError;

/// `{"message": ...}` body, shared by error and status responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a status message response
pub fn message(text: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.into(),
    })
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid ID format: {0}")]
    /// 标识符格式错误 (400)
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    /// 请求体无法解码 (400)
    InvalidBody(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{message}: {source}")]
    /// 存储错误 (500)，细节只写日志
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Request timed out after {0:?}")]
    /// 请求处理超时 (408)
    RequestTimeout(Duration),

    #[error("Route not found: {0}")]
    /// 未知路由 (404)
    NoRoute(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Wrap a store failure with the message returned to the caller
    pub fn store(message: &'static str, source: StoreError) -> Self {
        Self::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::NoRoute(_) => StatusCode::NOT_FOUND,
            AppError::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let text = match &self {
            AppError::InvalidId(_) => "Invalid ID format".to_string(),
            AppError::InvalidBody(detail) => format!("Invalid request body: {detail}"),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Store { message, source } => {
                error!(target: "database", error = %source, "{}", message);
                (*message).to_string()
            }
            AppError::RequestTimeout(_) => "Request timed out".to_string(),
            AppError::NoRoute(path) => format!("No route for {path}"),
        };

        (status, message(text)).into_response()
    }
}

impl From<IdError> for AppError {
    fn from(e: IdError) -> Self {
        match e {
            IdError::InvalidFormat(text) => AppError::InvalidId(text),
        }
    }
}

impl From<BodyError> for AppError {
    fn from(e: BodyError) -> Self {
        match e {
            BodyError::InvalidBody(detail) => AppError::InvalidBody(detail),
        }
    }
}
