//! Repository Module
//!
//! Persistence gateway over the SurrealDB collection. Typed filters and field
//! sets are translated to SurrealQL here and nowhere else.

pub mod employee;

pub use employee::EmployeeRepository;

use std::future::IntoFuture;
use std::time::Duration;

use surrealdb::RecordId;
use surrealdb::engine::any::Any;
use surrealdb::method::Query;
use thiserror::Error;

use crate::db::models::EmployeeId;

/// Repository error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] surrealdb::Error),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected store response: {0}")]
    Unexpected(String),
}

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record selector, resolved to a SurrealDB target per query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    /// Every record in the collection
    All,
    /// The single record keyed by this identifier
    ById(EmployeeId),
}

impl EmployeeFilter {
    /// SurrealQL target expression; `$table` / `$rid` are bound by [`BaseRepository`]
    fn target(&self) -> &'static str {
        match self {
            Self::All => "type::table($table)",
            Self::ById(_) => "$rid",
        }
    }
}

// =============================================================================
// ID Convention: 记录键 = 标识符的 24 位小写十六进制文本
// =============================================================================
//
//   - 创建: RecordId::from_table_key(table, id.to_hex())
//   - 读取: SELECT record::id(id) AS oid ... 后用 ObjectId::parse_hex 还原

/// Base repository: database handle, collection name and per-call deadline
#[derive(Clone)]
pub struct BaseRepository {
    db: crate::db::Store,
    table: String,
    timeout: Duration,
}

impl BaseRepository {
    pub fn new(db: crate::db::Store, table: impl Into<String>, timeout: Duration) -> Self {
        Self {
            db,
            table: table.into(),
            timeout,
        }
    }

    pub fn db(&self) -> &crate::db::Store {
        &self.db
    }

    pub fn record_id(&self, id: &EmployeeId) -> RecordId {
        RecordId::from_table_key(self.table.as_str(), id.to_hex())
    }

    /// Run a query against `filter`'s target, with `$table` and `$rid` bound
    pub fn query(&self, sql: &str, filter: EmployeeFilter) -> Query<'_, Any> {
        let sql = sql.replace("$target", filter.target());
        let query = self.db.query(sql).bind(("table", self.table.clone()));
        match filter {
            EmployeeFilter::All => query,
            EmployeeFilter::ById(id) => query.bind(("rid", self.record_id(&id))),
        }
    }

    /// Await a store call, abandoning it once the deadline passes
    pub async fn bounded<F, T>(&self, call: F) -> StoreResult<T>
    where
        F: IntoFuture<Output = surrealdb::Result<T>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
            .map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_targets() {
        assert_eq!(EmployeeFilter::All.target(), "type::table($table)");
        let id = EmployeeId::new();
        assert_eq!(EmployeeFilter::ById(id).target(), "$rid");
    }

    #[tokio::test]
    async fn stalled_call_times_out() {
        let base = BaseRepository::new(crate::db::Store::init(), "employee", Duration::ZERO);
        let result = base
            .bounded(std::future::pending::<surrealdb::Result<()>>())
            .await;
        assert!(matches!(result, Err(StoreError::Timeout(d)) if d == Duration::ZERO));
    }

    #[tokio::test]
    async fn completed_call_within_deadline_passes_through() {
        let base = BaseRepository::new(crate::db::Store::init(), "employee", Duration::from_secs(1));
        let value = base.bounded(async { Ok::<_, surrealdb::Error>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }
}
