/**
 * Refresh Handler
 *
 * `POST /auth/refresh` takes the member e-mail as the raw request body and
 * answers with a new access token as plain text. The stored refresh token
 * for that e-mail must exist, be unexpired and verify as a refresh token
 * issued for the same e-mail.
 */

use axum::{extract::State, http::StatusCode};
use chrono::Utc;

use crate::backend::auth::refresh_tokens::find_refresh_token_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::{require_pool, AppState};

const INVALID_REFRESH: &str = "Invalid or expired refresh token";

/// Accept `a@b.c` as well as a JSON string `"a@b.c"`
fn parse_email_body(body: &str) -> &str {
    let trimmed = body.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
}

pub async fn refresh(State(state): State<AppState>, body: String) -> Result<String, BackendError> {
    let pool = require_pool(state.db_pool.clone())?;
    let email = parse_email_body(&body);

    let stored = find_refresh_token_by_email(&pool, email)
        .await?
        .filter(|stored| !stored.is_expired(Utc::now()))
        .ok_or_else(|| BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_REFRESH))?;

    let claims = state
        .tokens
        .verify_refresh_token(&stored.token)
        .ok()
        .filter(|claims| claims.email == email)
        .ok_or_else(|| {
            tracing::warn!("Stored refresh token for {} failed verification", email);
            BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_REFRESH)
        })?;

    let access_token = state.tokens.create_access_token(claims.sub, &claims.email)?;
    tracing::debug!("Access token refreshed for {}", email);
    Ok(access_token)
}
