/**
 * Router Configuration
 *
 * Combines all route configurations into a single axum router.
 *
 * # Route Order
 *
 * 1. Auth routes (`/auth/...`)
 * 2. API routes (`/api/comments/...`, `/api/reviews/...`), protected
 * 3. Fallback handler (404)
 *
 * Every request is traced with `TraceLayer`.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_api_routes, configure_auth_routes};
use crate::backend::server::state::AppState;

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());

    let router = configure_api_routes(router, &app_state);

    let router = router.fallback(not_found).layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}
