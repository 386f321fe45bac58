/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in member. The bearer access token
 * is verified, and when a database is configured the member must still
 * exist. The resulting `AuthenticatedMember` is attached to the request
 * extensions for handlers to pick up through the `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::members::get_member_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated member data extracted from the access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedMember {
    pub member_id: Uuid,
    pub email: String,
}

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing, invalid, expired, a
/// refresh token, or belongs to a member that no longer exists.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthorized("Missing bearer token")
    })?;

    let claims = app_state.tokens.verify_access_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized("Invalid or expired token")
    })?;

    if let Some(pool) = &app_state.db_pool {
        if get_member_by_id(pool, claims.sub).await?.is_none() {
            tracing::warn!("Member not found in database: {}", claims.sub);
            return Err(BackendError::unauthorized("Unknown member"));
        }
    }

    request.extensions_mut().insert(AuthenticatedMember {
        member_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated member
///
/// Only valid on routes behind [`auth_middleware`]; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedMember);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let member = parts
            .extensions
            .get::<AuthenticatedMember>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedMember not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(member))
    }
}
