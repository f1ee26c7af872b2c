//! `/healthz` endpoint.

use axum::Json;
use serde::Serialize;

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Fixed status string while the process is serving.
    pub result: String,
}

/// GET /healthz. Touches no storage, so it reports healthy even when the
/// database file is gone.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        result: "OK - healthy".into(),
    })
}
