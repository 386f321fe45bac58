/**
 * Authentication Handler Types
 *
 * Request and response bodies of the `/auth` endpoints.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::members::Member;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    /// Plain password, hashed before storage
    pub password: String,
    pub name: String,
    /// Digits, optionally separated by dashes
    pub phone: String,
    pub nickname: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// The refresh token is not part of the body; it travels in the
/// `refreshToken` cookie.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub member: MemberResponse,
}

/// Member information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.to_string(),
            email: member.email,
            name: member.name,
            nickname: member.nickname,
            created_at: member.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CheckEmailQuery {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CheckEmailResponse {
    pub email: String,
    pub available: bool,
}

/// E-mail recovery request
#[derive(Deserialize, Serialize, Debug)]
pub struct FindEmailRequest {
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FindEmailResponse {
    /// Partially masked, e.g. `ab***@example.com`
    pub email: String,
}

/// Password recovery request
#[derive(Deserialize, Serialize, Debug)]
pub struct FindPasswordRequest {
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FindPasswordResponse {
    /// Shown once; only its hash is stored
    pub temporary_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
