//! Terms repository
//!
//! Each operation borrows one connection for its reads and lets it go when
//! the operation returns, whether it succeeded or not.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::db::error::DbError;
use crate::db::store::{ConnectionSource, TermStore};
use crate::models::{TermDocument, TermsDocument, TermsQuery};
use crate::services::metrics::record_query;
use crate::services::TermSerializer;

/// Resolve the code of the single current term
pub async fn get_current_term_code<C>(connection: &mut C) -> Result<String, DbError>
where
    C: TermStore + ?Sized,
{
    let mut codes = connection.fetch_current_term_codes().await?;
    match codes.len() {
        0 => Err(DbError::NoCurrentTerm),
        1 => Ok(codes.remove(0)),
        n => {
            warn!("Current term lookup returned {} rows", n);
            Err(DbError::MultipleResults)
        }
    }
}

pub struct TermRepository<S> {
    source: Arc<S>,
    serializer: TermSerializer,
}

impl<S: ConnectionSource> TermRepository<S> {
    pub fn new(source: Arc<S>, serializer: TermSerializer) -> Self {
        Self { source, serializer }
    }

    /// All terms, paginated by `query`
    pub async fn get_terms(&self, query: &TermsQuery) -> Result<TermsDocument, DbError> {
        let result = self.fetch_terms(query).await;
        record_query("get_terms", &result);
        result
    }

    async fn fetch_terms(&self, query: &TermsQuery) -> Result<TermsDocument, DbError> {
        let mut connection = self.source.get_connection().await?;

        let rows = connection.fetch_terms(None).await?;
        let current_term_code = get_current_term_code(&mut connection).await?;
        debug!("Fetched {} terms, current term {}", rows.len(), current_term_code);

        Ok(self
            .serializer
            .serialize_terms(rows, &current_term_code, query))
    }

    /// A term by its unique code; `None` when no term has that code
    pub async fn get_term_by_term_code(
        &self,
        term_code: &str,
    ) -> Result<Option<TermDocument>, DbError> {
        let result = self.fetch_term_by_term_code(term_code).await;
        record_query("get_term_by_term_code", &result);
        result
    }

    async fn fetch_term_by_term_code(
        &self,
        term_code: &str,
    ) -> Result<Option<TermDocument>, DbError> {
        let mut connection = self.source.get_connection().await?;

        let mut rows = connection.fetch_terms(Some(term_code)).await?;
        let current_term_code = get_current_term_code(&mut connection).await?;

        match rows.len() {
            0 => Ok(None),
            1 => {
                let row = rows.remove(0);
                Ok(Some(self.serializer.serialize_term(row, &current_term_code)))
            }
            n => {
                warn!("Term code {} matched {} rows", term_code, n);
                Err(DbError::MultipleResults)
            }
        }
    }
}
