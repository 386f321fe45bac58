/**
 * Server Initialization
 *
 * 1. Load the optional database (and run migrations)
 * 2. Build the application state
 * 3. Create the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing eatery reviews backend");

    let db_pool = load_database(config.database_url.as_deref()).await;
    let app_state = AppState::new(config, db_pool);
    tracing::info!("Comment store: {}", app_state.comments.backend_name());

    create_router(app_state)
}
