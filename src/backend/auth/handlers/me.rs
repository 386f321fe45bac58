/**
 * Get Current Member Handler
 *
 * `GET /auth/me` sits behind the auth middleware; the member id comes from
 * the verified access token.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::MemberResponse;
use crate::backend::auth::members::get_member_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;

/// # Errors
///
/// * `401 Unauthorized` - missing or invalid access token (middleware)
/// * `404 Not Found` - member no longer exists
/// * `503 Service Unavailable` - no database configured
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(member): AuthUser,
) -> Result<Json<MemberResponse>, BackendError> {
    let pool = require_pool(pool)?;

    let found = get_member_by_id(&pool, member.member_id).await?.ok_or_else(|| {
        tracing::warn!("Member not found: {}", member.member_id);
        BackendError::not_found("Member not found")
    })?;

    Ok(Json(found.into()))
}
