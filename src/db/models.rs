//! Database row types for PostgreSQL
//!
//! These types map directly to database rows and are shaped into
//! the API documents in models/term.rs by the serializer.

use chrono::NaiveDate;
use sqlx::FromRow;

/// Term row from the terms view
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TermRow {
    pub term_code: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub academic_year: Option<String>,
    pub financial_aid_year: Option<String>,
    pub housing_start_date: Option<NaiveDate>,
    pub housing_end_date: Option<NaiveDate>,
}

impl TermRow {
    pub fn is_current(&self, current_term_code: &str) -> bool {
        self.term_code == current_term_code
    }
}

/// Row of the current term lookup
#[derive(Debug, Clone, FromRow)]
pub struct CurrentTermRow {
    pub term_code: String,
}
