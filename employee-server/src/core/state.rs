use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;

/// 服务器状态 - 持有共享的存储句柄
///
/// 连接在启动时建立一次，之后只读共享给所有请求；Clone 只复制句柄。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 存储连接 |
/// | employees | 员工集合网关 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub employees: EmployeeRepository,
}

impl ServerState {
    /// 建立存储连接并构造状态
    ///
    /// 连接失败直接返回错误，调用方应终止进程。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(&config.store).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// Build state around an already-open connection
    pub fn with_db(config: Config, db: DbService) -> Self {
        let employees = db.employees(&config.store);
        Self { config, employees }
    }
}
