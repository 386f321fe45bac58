//! `refreshToken` cookie handling

use ::cookie::time::Duration;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const REFRESH_COOKIE: &str = "refreshToken";

/// `HttpOnly` cookie carrying a refresh token, scoped to `/auth`
pub fn refresh_cookie(token: impl Into<String>, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token.into()))
        .http_only(true)
        .path("/auth")
        .max_age(Duration::seconds(max_age_secs))
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

/// Cookie that makes the client drop its refresh cookie
pub fn cleared_refresh_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = refresh_cookie("", 0, secure);
    cookie.make_removal();
    cookie
}

/// Refresh token sent by the client, if any
pub fn read_refresh_cookie(jar: &CookieJar) -> Option<String> {
    jar.get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
