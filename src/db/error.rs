//! Database error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to create connection pool: {0}")]
    PoolCreation(#[source] sqlx::Error),

    #[error("failed to acquire connection: {0}")]
    Acquire(#[source] sqlx::Error),

    /// Startup validation failure. The cause is logged, not carried.
    #[error("Unable to connect to database")]
    UnableToConnect,

    #[error("no current term is defined")]
    NoCurrentTerm,

    #[error("Expect a single object but got multiple results.")]
    MultipleResults,

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl DbError {
    /// Whether the failure is about reaching the database rather than the data
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DbError::PoolCreation(_) | DbError::Acquire(_) | DbError::UnableToConnect
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DbError::UnableToConnect.to_string(),
            "Unable to connect to database"
        );
        assert_eq!(
            DbError::MultipleResults.to_string(),
            "Expect a single object but got multiple results."
        );
    }

    #[test]
    fn test_unavailable_classification() {
        assert!(DbError::UnableToConnect.is_unavailable());
        assert!(DbError::Acquire(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(!DbError::MultipleResults.is_unavailable());
        assert!(!DbError::Query(sqlx::Error::RowNotFound).is_unavailable());
    }
}
