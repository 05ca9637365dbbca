//! Terms API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::db::DbError;
use crate::models::TermsQuery;
use crate::AppState;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn error_response(e: &DbError, message: &str) -> ErrorResponse {
    tracing::error!("{}: {}", message, e);

    let status = if e.is_unavailable() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(serde_json::json!({ "error": message })))
}

/// GET /api/v1/terms - List terms, paginated
pub async fn get_terms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TermsQuery>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let doc = state
        .terms
        .get_terms(&query)
        .await
        .map_err(|e| error_response(&e, "Failed to get terms"))?;

    Ok(Json(doc))
}

/// GET /api/v1/terms/:term_code - Get a term by its code
pub async fn get_term_by_term_code(
    State(state): State<Arc<AppState>>,
    Path(term_code): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let term = state
        .terms
        .get_term_by_term_code(&term_code)
        .await
        .map_err(|e| error_response(&e, "Failed to get term"))?;

    match term {
        Some(doc) => Ok(Json(doc)),
        None => {
            tracing::debug!("Term {} not found", term_code);
            Err((
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Term not found" })),
            ))
        }
    }
}
