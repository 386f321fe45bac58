/**
 * Application State Management
 *
 * `AppState` is the central state container shared by all handlers:
 * - the loaded `AppConfig`
 * - the optional PostgreSQL pool
 * - the token service
 * - the comment service (PostgreSQL or in-memory)
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State<CommentService>` or `State<Option<PgPool>>`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::comments::CommentService;
use crate::backend::error::BackendError;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,

    /// `None` when no `DATABASE_URL` is configured
    pub db_pool: Option<PgPool>,

    pub tokens: TokenService,

    pub comments: CommentService,
}

impl AppState {
    /// State for the given pool; comments use PostgreSQL when a pool is
    /// present and the in-memory store otherwise
    pub fn new(config: AppConfig, db_pool: Option<PgPool>) -> Self {
        let comments = match &db_pool {
            Some(pool) => CommentService::postgres(pool.clone()),
            None => CommentService::in_memory(),
        };
        Self {
            tokens: TokenService::from_config(&config),
            config,
            db_pool,
            comments,
        }
    }

    /// State without a database
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, None)
    }
}

/// Pool for routes that cannot run without a database
pub fn require_pool(pool: Option<PgPool>) -> Result<PgPool, BackendError> {
    pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::ServiceUnavailable
    })
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.comments.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_state_uses_memory_comments() {
        let state = AppState::in_memory(AppConfig::default());
        assert!(state.db_pool.is_none());
        assert_eq!(state.comments.backend_name(), "memory");
    }

    #[test]
    fn test_require_pool_without_database() {
        let err = require_pool(None).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
