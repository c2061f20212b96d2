use std::time::Duration;

use crate::core::{Result, ServerError};

const DEFAULT_NAMESPACE: &str = "company";
const DEFAULT_DATABASE: &str = "company";
const DEFAULT_COLLECTION: &str = "employee";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// 存储连接配置
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// 连接 URL: mem:// | rocksdb://<path> | ws://host:port
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// 员工集合 (表) 名
    pub collection: String,
    /// Root 凭据，二者同时设置时才登录
    pub username: Option<String>,
    pub password: Option<String>,
    /// 启动握手超时
    pub connect_timeout: Duration,
    /// 单次存储调用超时
    pub call_timeout: Duration,
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | STORE_URL (或 MONGO_URI) | 必填 | 存储连接 URL |
/// | STORE_NAMESPACE | company | 命名空间 |
/// | STORE_DATABASE | company | 数据库 |
/// | STORE_COLLECTION | employee | 集合名 |
/// | STORE_USERNAME / STORE_PASSWORD | - | Root 凭据 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | CONNECT_TIMEOUT_MS | 10000 | 连接握手超时(毫秒) |
/// | STORE_TIMEOUT_MS | 5000 | 单次存储调用超时(毫秒) |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let parsed = |key: &str, default: u64| -> Result<u64> {
            match var(key) {
                Some(v) => v
                    .parse()
                    .map_err(|_| ServerError::Config(format!("{key} must be an integer, got {v:?}"))),
                None => Ok(default),
            }
        };

        let url = var("STORE_URL")
            .or_else(|| var("MONGO_URI"))
            .ok_or_else(|| ServerError::Config("STORE_URL must be set".into()))?;

        let http_port = match var("HTTP_PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| ServerError::Config(format!("HTTP_PORT must be a port number, got {v:?}")))?,
            None => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            store: StoreConfig {
                url,
                namespace: var("STORE_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.into()),
                database: var("STORE_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.into()),
                collection: var("STORE_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.into()),
                username: var("STORE_USERNAME"),
                password: var("STORE_PASSWORD"),
                connect_timeout: Duration::from_millis(parsed("CONNECT_TIMEOUT_MS", DEFAULT_CONNECT_TIMEOUT_MS)?),
                call_timeout: Duration::from_millis(parsed("STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS)?),
            },
            http_port,
            request_timeout_ms: parsed("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?,
            log_level: var("LOG_LEVEL"),
            log_dir: var("LOG_DIR"),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    /// 使用默认值构造指向给定存储的配置
    ///
    /// 常用于测试场景
    pub fn for_store(url: impl Into<String>) -> Self {
        Self {
            store: StoreConfig {
                url: url.into(),
                namespace: DEFAULT_NAMESPACE.into(),
                database: DEFAULT_DATABASE.into(),
                collection: DEFAULT_COLLECTION.into(),
                username: None,
                password: None,
                connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
                call_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
            },
            http_port: DEFAULT_HTTP_PORT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: None,
            log_dir: None,
            environment: "development".into(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
