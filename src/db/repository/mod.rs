//! Database repositories
//!
//! Repository pattern for database access, separating data access logic
//! from the HTTP layer.

pub mod terms;

pub use terms::TermRepository;
