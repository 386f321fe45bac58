/**
 * Registration Handlers
 *
 * - `POST /auth/register` - create a member
 * - `GET /auth/check-email` - e-mail availability
 *
 * # Validation
 *
 * - E-mail must contain `@` with text on both sides
 * - Password must be at least 8 characters long
 * - Name and nickname must not be blank
 * - Phone must be 9 to 11 digits, dashes allowed
 */

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{CheckEmailQuery, CheckEmailResponse, MemberResponse, RegisterRequest};
use crate::backend::auth::members::{create_member, get_member_by_email, normalize_phone, NewMember};
use crate::backend::error::BackendError;
use crate::backend::server::state::require_pool;
use crate::shared::SharedError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_email(email: &str) -> Result<(), SharedError> {
    match email.split_once('@') {
        Some((local, host)) if !local.is_empty() && !host.is_empty() && !host.contains('@') => Ok(()),
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}

pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), SharedError> {
    let well_formed = phone.chars().all(|c| c.is_ascii_digit() || c == '-');
    let digits = normalize_phone(phone).len();
    if !well_formed || !(9..=11).contains(&digits) {
        return Err(SharedError::validation("phone", "Phone must be 9-11 digits"));
    }
    Ok(())
}

fn validate_register(request: &RegisterRequest) -> Result<(), SharedError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    if request.name.trim().is_empty() {
        return Err(SharedError::validation("name", "Name cannot be empty"));
    }
    if request.nickname.trim().is_empty() {
        return Err(SharedError::validation("nickname", "Nickname cannot be empty"));
    }
    validate_phone(&request.phone)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|db| db.is_unique_violation())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - a field failed validation
/// * `409 Conflict` - the e-mail is already registered
/// * `503 Service Unavailable` - no database configured
pub async fn register(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), BackendError> {
    let pool = require_pool(pool)?;
    tracing::info!("Register request for: {}", request.email);

    validate_register(&request)?;

    if get_member_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::handler(StatusCode::CONFLICT, "Email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let member = create_member(
        &pool,
        NewMember {
            email: request.email,
            password_hash,
            name: request.name.trim().to_string(),
            phone: request.phone,
            nickname: request.nickname.trim().to_string(),
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            BackendError::handler(StatusCode::CONFLICT, "Email already registered")
        } else {
            e.into()
        }
    })?;

    tracing::info!("Member registered: {} ({})", member.id, member.email);
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// E-mail availability check
pub async fn check_email(
    State(pool): State<Option<PgPool>>,
    Query(query): Query<CheckEmailQuery>,
) -> Result<Json<CheckEmailResponse>, BackendError> {
    let pool = require_pool(pool)?;
    validate_email(&query.email)?;

    let available = get_member_by_email(&pool, &query.email).await?.is_none();
    Ok(Json(CheckEmailResponse {
        email: query.email,
        available,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "diner@example.com".to_string(),
            password: "password123".to_string(),
            name: "Kim Diner".to_string(),
            phone: "010-1234-5678".to_string(),
            nickname: "diner".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_register(&request()).is_ok());
    }

    #[test]
    fn test_invalid_email() {
        for email in ["invalid-email", "@example.com", "user@", "a@b@c"] {
            let mut req = request();
            req.email = email.to_string();
            assert_matches!(
                validate_register(&req),
                Err(SharedError::ValidationError { ref field, .. }) if field == "email"
            );
        }
    }

    #[test]
    fn test_short_password() {
        let mut req = request();
        req.password = "short".to_string();
        assert_matches!(
            validate_register(&req),
            Err(SharedError::ValidationError { ref field, .. }) if field == "password"
        );
    }

    #[test]
    fn test_blank_nickname() {
        let mut req = request();
        req.nickname = "  ".to_string();
        assert!(validate_register(&req).is_err());
    }

    #[test]
    fn test_phone_format() {
        assert!(validate_phone("01012345678").is_ok());
        assert!(validate_phone("02-123-4567").is_ok());
        assert!(validate_phone("010-1234-abcd").is_err());
        assert!(validate_phone("1234").is_err());
    }

    #[tokio::test]
    async fn test_register_no_database() {
        let result = register(State(None), Json(request())).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
