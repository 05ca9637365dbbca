//! Connection borrowing and the statements run on a borrowed connection
//!
//! A connection is returned to its pool when dropped, so every borrow is
//! released exactly once on every exit path.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::Postgres;
use tracing::error;

use crate::db::error::DbError;
use crate::db::models::{CurrentTermRow, TermRow};
use crate::db::queries;

/// Read statements against the terms views
#[async_trait]
pub trait TermStore: Send {
    /// All terms, or only those matching `term_code`
    async fn fetch_terms(&mut self, term_code: Option<&str>) -> Result<Vec<TermRow>, DbError>;

    /// Every row of the current term lookup
    async fn fetch_current_term_codes(&mut self) -> Result<Vec<String>, DbError>;

    async fn ping(&mut self) -> Result<(), DbError>;
}

/// Something that lends connections
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    type Connection: TermStore;

    /// Borrow a connection, waiting for the pool to be ready first
    async fn get_connection(&self) -> Result<Self::Connection, DbError>;

    /// Borrow a connection and run the health-check statement.
    ///
    /// The connection is released before the result is returned. Any failure
    /// is logged and reported as [`DbError::UnableToConnect`].
    async fn validate_connection(&self) -> Result<(), DbError> {
        let checked = async {
            let mut connection = self.get_connection().await?;
            connection.ping().await
        }
        .await;

        checked.map_err(|e| {
            error!("Database validation failed: {}", e);
            DbError::UnableToConnect
        })
    }
}

#[async_trait]
impl TermStore for PoolConnection<Postgres> {
    async fn fetch_terms(&mut self, term_code: Option<&str>) -> Result<Vec<TermRow>, DbError> {
        let query = sqlx::query_as::<_, TermRow>(queries::terms(term_code));
        let query = match term_code {
            Some(code) => query.bind(code),
            None => query,
        };

        Ok(query.fetch_all(&mut **self).await?)
    }

    async fn fetch_current_term_codes(&mut self) -> Result<Vec<String>, DbError> {
        let rows = sqlx::query_as::<_, CurrentTermRow>(queries::current_term())
            .fetch_all(&mut **self)
            .await?;

        Ok(rows.into_iter().map(|row| row.term_code).collect())
    }

    async fn ping(&mut self) -> Result<(), DbError> {
        sqlx::query(queries::PING).execute(&mut **self).await?;
        Ok(())
    }
}
