//! In-memory connection source for repository tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::db::error::DbError;
use crate::db::models::TermRow;
use crate::db::store::{ConnectionSource, TermStore};

pub fn term(code: &str, description: &str) -> TermRow {
    TermRow {
        term_code: code.to_string(),
        description: description.to_string(),
        start_date: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap_or_default(),
        end_date: NaiveDate::from_ymd_opt(2021, 3, 19).unwrap_or_default(),
        academic_year: Some("2021".to_string()),
        financial_aid_year: None,
        housing_start_date: None,
        housing_end_date: None,
    }
}

fn injected() -> DbError {
    DbError::Query(sqlx::Error::Protocol("injected failure".to_string()))
}

#[derive(Default)]
struct Counters {
    inits: AtomicUsize,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Connection source over fixed rows, counting borrows and releases
#[derive(Default)]
pub struct FakeSource {
    terms: Vec<TermRow>,
    current_codes: Vec<String>,
    fail_acquire: bool,
    fail_terms: bool,
    fail_current: bool,
    fail_ping: bool,
    init_delay: Option<Duration>,
    ready: OnceCell<()>,
    counters: Arc<Counters>,
}

impl FakeSource {
    pub fn new(terms: Vec<TermRow>, current_codes: &[&str]) -> Self {
        Self {
            terms,
            current_codes: current_codes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing_acquire(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    pub fn failing_terms(mut self) -> Self {
        self.fail_terms = true;
        self
    }

    pub fn failing_current(mut self) -> Self {
        self.fail_current = true;
        self
    }

    pub fn failing_ping(mut self) -> Self {
        self.fail_ping = true;
        self
    }

    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay = Some(delay);
        self
    }

    pub fn inits(&self) -> usize {
        self.counters.inits.load(Ordering::SeqCst)
    }

    pub fn acquired(&self) -> usize {
        self.counters.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.counters.released.load(Ordering::SeqCst)
    }

    pub fn outstanding(&self) -> usize {
        self.acquired() - self.released()
    }
}

pub struct FakeConnection {
    terms: Vec<TermRow>,
    current_codes: Vec<String>,
    fail_terms: bool,
    fail_current: bool,
    fail_ping: bool,
    counters: Arc<Counters>,
}

impl Drop for FakeConnection {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectionSource for FakeSource {
    type Connection = FakeConnection;

    async fn get_connection(&self) -> Result<Self::Connection, DbError> {
        self.ready
            .get_or_init(|| async {
                if let Some(delay) = self.init_delay {
                    tokio::time::sleep(delay).await;
                }
                self.counters.inits.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        if self.fail_acquire {
            return Err(DbError::Acquire(sqlx::Error::PoolTimedOut));
        }

        self.counters.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(FakeConnection {
            terms: self.terms.clone(),
            current_codes: self.current_codes.clone(),
            fail_terms: self.fail_terms,
            fail_current: self.fail_current,
            fail_ping: self.fail_ping,
            counters: self.counters.clone(),
        })
    }
}

#[async_trait]
impl TermStore for FakeConnection {
    async fn fetch_terms(&mut self, term_code: Option<&str>) -> Result<Vec<TermRow>, DbError> {
        if self.fail_terms {
            return Err(injected());
        }

        Ok(self
            .terms
            .iter()
            .filter(|row| term_code.map_or(true, |code| row.term_code == code))
            .cloned()
            .collect())
    }

    async fn fetch_current_term_codes(&mut self) -> Result<Vec<String>, DbError> {
        if self.fail_current {
            return Err(injected());
        }
        Ok(self.current_codes.clone())
    }

    async fn ping(&mut self) -> Result<(), DbError> {
        if self.fail_ping {
            return Err(injected());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_source_contract_first_borrows_share_one_initialization() {
        let source = FakeSource::new(vec![term("202101", "Winter 2021")], &["202101"])
            .with_init_delay(Duration::from_millis(20));

        let (a, b, c) = tokio::join!(
            source.get_connection(),
            source.get_connection(),
            source.get_connection()
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(source.inits(), 1);
        assert_eq!(source.acquired(), 3);
    }

    #[tokio::test]
    async fn test_validate_releases_before_error() {
        let source = FakeSource::new(vec![], &[]).failing_ping();

        let result = source.validate_connection().await;

        assert!(matches!(result, Err(DbError::UnableToConnect)));
        assert_eq!(source.acquired(), 1);
        assert_eq!(source.released(), 1);
    }

    #[tokio::test]
    async fn test_validate_without_connection_releases_nothing() {
        let source = FakeSource::new(vec![], &[]).failing_acquire();

        let result = source.validate_connection().await;

        assert!(matches!(result, Err(DbError::UnableToConnect)));
        assert_eq!(source.acquired(), 0);
        assert_eq!(source.released(), 0);
    }

    #[tokio::test]
    async fn test_validate_success() {
        let source = FakeSource::new(vec![], &[]);

        assert!(source.validate_connection().await.is_ok());
        assert_eq!(source.outstanding(), 0);
    }
}
