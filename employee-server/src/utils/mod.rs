//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 处理器返回类型
//! - 日志初始化

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, MessageResponse, message};
pub use result::AppResult;
