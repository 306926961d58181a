//! API Routes
//!
//! Configures the Axum router with all facade endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_namespace_handler, delete_handler, flush_handler, get_handler, health_handler,
    set_disabled_handler, set_handler, set_prefix_handler, set_tag_handler, settings_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache` - Store content under a namespaced key
/// - `GET /cache/:key` - Read content, `?tag=false` skips the tag
/// - `DELETE /cache/:key` - Remove one namespaced key
/// - `DELETE /cache` - Flush the whole provider
/// - `DELETE /namespace` - Remove only keys under the current prefix
/// - `GET /settings` - Current prefix, tag and kill switch
/// - `PUT /settings/prefix`, `PUT /settings/tag`, `PUT /settings/disabled`
/// - `GET /stats` - Facade counters
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache", put(set_handler).delete(flush_handler))
        .route("/cache/:key", get(get_handler).delete(delete_handler))
        .route("/namespace", delete(clear_namespace_handler))
        .route("/settings", get(settings_handler))
        .route("/settings/prefix", put(set_prefix_handler))
        .route("/settings/tag", put(set_tag_handler))
        .route("/settings/disabled", put(set_disabled_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
