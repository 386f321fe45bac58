/**
 * Account Recovery Handlers
 *
 * - `POST /auth/find-email` - name + phone → masked e-mail
 * - `POST /auth/find-password` - e-mail + phone → temporary password
 *
 * The temporary password replaces the stored hash and is returned once.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::handlers::types::{
    FindEmailRequest, FindEmailResponse, FindPasswordRequest, FindPasswordResponse,
};
use crate::backend::auth::members::{
    find_member_by_email_and_phone, find_member_by_name_and_phone, update_password_hash,
};
use crate::backend::error::BackendError;
use crate::backend::server::state::require_pool;

const TEMPORARY_PASSWORD_LENGTH: usize = 12;

/// Hide most of the local part: `abcdef@example.com` → `ab***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, host)) => {
            let visible = if local.chars().count() > 2 { 2 } else { 1 };
            let prefix: String = local.chars().take(visible).collect();
            format!("{}***@{}", prefix, host)
        }
        None => "***".to_string(),
    }
}

fn temporary_password() -> String {
    Uuid::new_v4().simple().to_string()[..TEMPORARY_PASSWORD_LENGTH].to_string()
}

pub async fn find_email(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<FindEmailRequest>,
) -> Result<Json<FindEmailResponse>, BackendError> {
    let pool = require_pool(pool)?;

    let member = find_member_by_name_and_phone(&pool, request.name.trim(), &request.phone)
        .await?
        .ok_or_else(|| BackendError::not_found("No member matches the given name and phone"))?;

    Ok(Json(FindEmailResponse {
        email: mask_email(&member.email),
    }))
}

pub async fn find_password(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<FindPasswordRequest>,
) -> Result<Json<FindPasswordResponse>, BackendError> {
    let pool = require_pool(pool)?;

    let member = find_member_by_email_and_phone(&pool, &request.email, &request.phone)
        .await?
        .ok_or_else(|| BackendError::not_found("No member matches the given email and phone"))?;

    let temporary_password = temporary_password();
    let password_hash = hash(&temporary_password, DEFAULT_COST)?;
    update_password_hash(&pool, member.id, &password_hash).await?;

    tracing::info!("Temporary password issued for member {}", member.id);
    Ok(Json(FindPasswordResponse { temporary_password }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("abcdef@example.com"), "ab***@example.com");
        assert_eq!(mask_email("abc@host"), "ab***@host");
        assert_eq!(mask_email("ab@host"), "a***@host");
        assert_eq!(mask_email("a@host"), "a***@host");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_temporary_password_shape() {
        let password = temporary_password();
        assert_eq!(password.len(), TEMPORARY_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(password, temporary_password());
    }
}
