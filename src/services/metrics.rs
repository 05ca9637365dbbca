use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// Repository operations by name and outcome
    static ref DB_QUERIES: IntCounterVec = register_int_counter_vec!(
        "terms_db_queries_total",
        "Term repository operations",
        &["operation", "outcome"]
    )
    .unwrap();
}

pub fn record_query<T, E>(operation: &str, result: &Result<T, E>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    DB_QUERIES.with_label_values(&[operation, outcome]).inc();
}
