/**
 * Router Configuration
 *
 * Assembles the application router: a liveness root, the API route table,
 * a permissive CORS layer, and a JSON 404 fallback.
 */

use axum::{http::StatusCode, response::Json, Router};
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - shared application state (pool, token keys, clients)
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route(
        "/",
        axum::routing::get(|| async { "Driftlog backend is live!" }),
    );

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for unknown routes
    let router = router.fallback(|| async {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Not found" })),
        )
    });

    router.layer(CorsLayer::permissive()).with_state(app_state)
}
