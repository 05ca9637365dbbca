//! Database module
//!
//! PostgreSQL integration using sqlx with:
//! - Lazily created connection pool owned by a data source
//! - Row types with FromRow
//! - Repository pattern for data access

pub mod error;
pub mod models;
pub mod pool;
pub mod queries;
pub mod repository;
pub mod store;

#[cfg(test)]
pub mod testing;

// Re-export commonly used items
pub use error::DbError;
pub use pool::{health_check, DataSource};
pub use repository::TermRepository;
pub use store::ConnectionSource;
