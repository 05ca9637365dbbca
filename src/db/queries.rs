//! SQL statements for the terms views

const CURRENT_TERM: &str = r#"
    SELECT term_code
    FROM current_term_v
"#;

const ALL_TERMS: &str = r#"
    SELECT term_code, description, start_date, end_date,
           academic_year, financial_aid_year,
           housing_start_date, housing_end_date
    FROM terms_v
    ORDER BY term_code DESC
"#;

const TERM_BY_CODE: &str = r#"
    SELECT term_code, description, start_date, end_date,
           academic_year, financial_aid_year,
           housing_start_date, housing_end_date
    FROM terms_v
    WHERE term_code = $1
    ORDER BY term_code DESC
"#;

/// Health check statement
pub const PING: &str = "SELECT 1";

/// Current term lookup, takes no parameters
pub fn current_term() -> &'static str {
    CURRENT_TERM
}

/// Terms query; filtered by `$1` when a term code is given
pub fn terms(term_code: Option<&str>) -> &'static str {
    match term_code {
        Some(_) => TERM_BY_CODE,
        None => ALL_TERMS,
    }
}
