/**
 * Login Handler
 *
 * Implements `POST /auth/login`.
 *
 * # Authentication Process
 *
 * 1. Look up member by e-mail
 * 2. Verify password using bcrypt
 * 3. Issue an access token (returned in the body) and a refresh token
 * 4. Store the refresh token for the e-mail and send it as a cookie
 *
 * Unknown e-mail and wrong password both answer 401 with the same message.
 */

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::verify;
use chrono::{Duration, Utc};

use crate::backend::auth::cookie::refresh_cookie;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::members::get_member_by_email;
use crate::backend::auth::refresh_tokens::upsert_refresh_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::{require_pool, AppState};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let pool = require_pool(state.db_pool.clone())?;
    tracing::info!("Login request for: {}", request.email);

    let member = get_member_by_email(&pool, &request.email).await?.ok_or_else(|| {
        tracing::warn!("Member not found: {}", request.email);
        BackendError::unauthorized(INVALID_CREDENTIALS)
    })?;

    if !verify(&request.password, &member.password_hash)? {
        tracing::warn!("Invalid password for member: {}", request.email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let access_token = state.tokens.create_access_token(member.id, &member.email)?;
    let refresh_token = state.tokens.create_refresh_token(member.id, &member.email)?;
    let expires_at = Utc::now() + Duration::seconds(state.tokens.refresh_ttl_secs());
    upsert_refresh_token(&pool, &member.email, &refresh_token, expires_at).await?;

    let cookie = refresh_cookie(refresh_token, state.tokens.refresh_ttl_secs(), state.config.cookie_secure);

    tracing::info!("Member logged in: {}", member.email);

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: state.tokens.access_ttl_secs(),
            member: member.into(),
        }),
    ))
}
