//! Axum router and shared application state.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use newsdesk_store::Store;

use crate::handlers::{health, metrics, pages};

/// Shared state accessible from axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage facade (pool + checkout counter).
    pub store: Arc<Store>,
}

/// Build the axum router with all routes.
///
/// Static routes win over the `/{id}` capture, so `/about`, `/create`,
/// `/healthz`, and `/metrics` never reach the post-detail handler.
pub fn router(store: Arc<Store>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(pages::index))
        .route("/healthz", get(health::healthz))
        .route("/metrics", get(metrics::metrics))
        .route("/about", get(pages::about))
        .route("/create", get(pages::create_form).post(pages::create))
        .route("/{id}", get(pages::post_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use newsdesk_store::{ConnectionConfig, new_in_memory, run_migrations};

    fn make_router() -> Router {
        let pool = new_in_memory(&ConnectionConfig::default()).unwrap();
        {
            let conn = pool.get().unwrap();
            let _ = run_migrations(&conn).unwrap();
        }
        router(Arc::new(Store::new(pool)))
    }

    async fn get_status(app: &Router, uri: &str) -> StatusCode {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.clone().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn index_route_responds() {
        let app = make_router();
        assert_eq!(get_status(&app, "/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_route_responds() {
        let app = make_router();
        assert_eq!(get_status(&app, "/healthz").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_route_responds() {
        let app = make_router();
        assert_eq!(get_status(&app, "/metrics").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn static_routes_win_over_the_id_capture() {
        let app = make_router();
        // Would all be 404s if the capture swallowed them.
        assert_eq!(get_status(&app, "/about").await, StatusCode::OK);
        assert_eq!(get_status(&app, "/create").await, StatusCode::OK);
        assert_eq!(get_status(&app, "/healthz").await, StatusCode::OK);
        assert_eq!(get_status(&app, "/metrics").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_id_segment_is_404() {
        let app = make_router();
        assert_eq!(get_status(&app, "/999999").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn nested_unknown_path_is_404() {
        let app = make_router();
        assert_eq!(get_status(&app, "/a/b/c").await, StatusCode::NOT_FOUND);
    }
}
