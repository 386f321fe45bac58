//! `POST /auth/logout`
//!
//! Revokes the refresh token carried by the cookie and clears the cookie.
//! Answers 200 even when there was nothing to revoke.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::{cleared_refresh_cookie, read_refresh_cookie};
use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::refresh_tokens::delete_refresh_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse, BackendError> {
    if let (Some(pool), Some(token)) = (&state.db_pool, read_refresh_cookie(&jar)) {
        let revoked = delete_refresh_token(pool, &token).await?;
        tracing::info!("Logout, refresh token revoked: {}", revoked);
    }

    Ok((
        jar.add(cleared_refresh_cookie(state.config.cookie_secure)),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    ))
}
