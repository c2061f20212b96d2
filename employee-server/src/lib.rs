//! Employee Server - 员工记录管理服务
//!
//! HTTP + JSON 的员工增删改查，持久化到 SurrealDB 文档集合。
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 标识符、模型编解码、存储网关
//! ├── api/           # HTTP 路由、处理器、中间件
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::models::{Employee, EmployeeId, EmployeeInput};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境：加载 .env 并初始化日志
pub fn setup_environment() -> Result<Config, ServerError> {
    // .env 不存在不算错误
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    init_logger_with_file(config.log_level.as_deref(), config.log_dir.as_deref());
    Ok(config)
}
