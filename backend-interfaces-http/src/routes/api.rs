use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    event_handlers, import_handlers, ops_handlers, query_handlers, toothbrush_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(ops_handlers::root))
        .route("/test-db", axum::routing::get(ops_handlers::test_db))
        .route("/api/events", axum::routing::post(event_handlers::create_event))
        .route(
            "/api/events/:id",
            axum::routing::delete(event_handlers::delete_event),
        )
        .route(
            "/api/toothbrush",
            axum::routing::post(toothbrush_handlers::create_toothbrush_event),
        )
        .route("/api/data", axum::routing::get(query_handlers::list_data))
        .route("/api/stats", axum::routing::get(query_handlers::get_stats))
        .route(
            "/api/import/events",
            axum::routing::post(import_handlers::import_events),
        )
        .route(
            "/api/import/toothbrush",
            axum::routing::post(import_handlers::import_toothbrush_events),
        )
        .route("/health/live", axum::routing::get(ops_handlers::health_live))
        .route("/health/ready", axum::routing::get(ops_handlers::health_ready))
        .route("/metrics", axum::routing::get(ops_handlers::metrics_prometheus))
        .fallback(ops_handlers::not_found)
        .with_state(state)
}
