//! Database connection pool management

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::Postgres;
use std::str::FromStr;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db::error::DbError;
use crate::db::store::ConnectionSource;

/// Owner of the shared connection pool.
///
/// The pool is created on first use; concurrent first callers wait on the
/// same initialization. A failed initialization is not cached and the next
/// caller tries again.
pub struct DataSource {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl DataSource {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Get the pool, creating it if needed
    pub async fn pool(&self) -> Result<&PgPool, DbError> {
        self.pool
            .get_or_try_init(|| create_pool(&self.config))
            .await
    }

    /// Wait for borrowed connections to come back and close the pool
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            info!("Closing PostgreSQL connection pool...");
            pool.close().await;
            info!("PostgreSQL connection pool closed");
        }
    }
}

#[async_trait]
impl ConnectionSource for DataSource {
    type Connection = PoolConnection<Postgres>;

    async fn get_connection(&self) -> Result<Self::Connection, DbError> {
        let pool = self.pool().await?;
        pool.acquire().await.map_err(DbError::Acquire)
    }
}

/// Create a PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    info!("Connecting to PostgreSQL...");

    let mut options =
        PgConnectOptions::from_str(&config.connect_string).map_err(DbError::PoolCreation)?;
    if let Some(user) = &config.user {
        options = options.username(user);
    }
    if let Some(password) = &config.password {
        options = options.password(password);
    }

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect_with(options)
        .await
        .map_err(DbError::PoolCreation)?;

    info!(
        "PostgreSQL connection pool created with {}..{} connections",
        config.min_connections, config.max_connections
    );

    Ok(pool)
}

/// Health check for the database; failures are logged by validation
pub async fn health_check<S: ConnectionSource>(source: &S) -> bool {
    source.validate_connection().await.is_ok()
}
