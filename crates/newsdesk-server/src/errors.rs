//! Request-scoped error type mapping storage faults to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use newsdesk_store::StoreError;

/// Error returned by handlers that touch storage.
///
/// Storage faults are not anticipated anywhere in the request path, so
/// they render as a bare 500 with no custom error page. The underlying
/// fault is logged at error level before the response is built.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage layer failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Store(err) => {
                error!(%err, "storage failure while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migration_failure() -> AppError {
        AppError::Store(StoreError::Migration {
            message: "v001 failed".into(),
        })
    }

    #[test]
    fn store_error_renders_as_500() {
        let resp = migration_failure().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_passes_through_store_error() {
        assert_eq!(
            migration_failure().to_string(),
            "migration error: v001 failed"
        );
    }
}
