//! `/metrics` endpoint — connection and post counters.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use newsdesk_store::PostRepo;

use crate::errors::AppError;
use crate::server::AppState;

/// Metrics response body.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    /// Total pool checkouts since process start. Never resets.
    pub db_connection_count: u64,
    /// Number of rows in the posts table at call time.
    pub post_count: usize,
}

/// GET /metrics.
///
/// Opens one connection and reuses it for the single query, so each call
/// adds exactly one to `db_connection_count`. The count it reports
/// includes its own checkout.
pub async fn metrics(State(state): State<AppState>) -> Result<Json<MetricsResponse>, AppError> {
    let conn = state.store.conn()?;
    let posts = PostRepo::list(&conn)?;
    Ok(Json(MetricsResponse {
        db_connection_count: state.store.connection_count(),
        post_count: posts.len(),
    }))
}
