use thiserror::Error;

use crate::db::StoreError;

/// 进程级错误 (启动、监听)，任何一种都会终止进程
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("存储连接失败: {0}")]
    Store(#[from] StoreError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
