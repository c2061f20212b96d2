//! Database Module
//!
//! Handles the SurrealDB connection handshake. The connection URL picks the
//! engine: `mem://`, `rocksdb://<path>` or `ws://host:port`.

pub mod models;
pub mod object_id;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::config::StoreConfig;
pub use repository::{StoreError, StoreResult};

/// Shared connection handle, cheap to clone
pub type Store = Surreal<Any>;

/// Database service — owns the store connection
#[derive(Clone)]
pub struct DbService {
    pub db: Store,
}

impl DbService {
    /// Connect, authenticate, select namespace/database and ping
    ///
    /// The whole handshake is bounded by `connect_timeout`.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let deadline = config.connect_timeout;
        let db = tokio::time::timeout(deadline, Self::handshake(config))
            .await
            .map_err(|_| StoreError::Timeout(deadline))??;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );
        Ok(Self { db })
    }

    async fn handshake(config: &StoreConfig) -> StoreResult<Store> {
        let db = any::connect(config.url.as_str()).await?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;
        db.health().await?;
        Ok(db)
    }

    /// Employee gateway bound to the configured collection
    pub fn employees(&self, config: &StoreConfig) -> repository::EmployeeRepository {
        repository::EmployeeRepository::new(
            self.db.clone(),
            config.collection.clone(),
            config.call_timeout,
        )
    }
}
