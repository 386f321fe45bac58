/**
 * Member Model and Database Operations
 *
 * Phone numbers are stored without dashes so `010-1234-5678` and
 * `01012345678` match the same member.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Member row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    /// Unique member ID (UUID)
    pub id: Uuid,
    /// Login e-mail, unique
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub name: String,
    /// Digits only
    pub phone: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a member
#[derive(Debug, Clone)]
pub struct NewMember {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub nickname: String,
}

/// Strip everything but digits from a phone number
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub async fn create_member(pool: &PgPool, member: NewMember) -> Result<Member, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let member = sqlx::query_as::<_, Member>(
        r#"
        INSERT INTO members (id, email, password_hash, name, phone, nickname, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, email, password_hash, name, phone, nickname, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&member.email)
    .bind(&member.password_hash)
    .bind(&member.name)
    .bind(normalize_phone(&member.phone))
    .bind(&member.nickname)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(member)
}

pub async fn get_member_by_email(pool: &PgPool, email: &str) -> Result<Option<Member>, sqlx::Error> {
    let member = sqlx::query_as::<_, Member>(
        r#"
        SELECT id, email, password_hash, name, phone, nickname, created_at, updated_at
        FROM members
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub async fn get_member_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Member>, sqlx::Error> {
    let member = sqlx::query_as::<_, Member>(
        r#"
        SELECT id, email, password_hash, name, phone, nickname, created_at, updated_at
        FROM members
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

/// Look a member up for e-mail recovery
pub async fn find_member_by_name_and_phone(
    pool: &PgPool,
    name: &str,
    phone: &str,
) -> Result<Option<Member>, sqlx::Error> {
    let member = sqlx::query_as::<_, Member>(
        r#"
        SELECT id, email, password_hash, name, phone, nickname, created_at, updated_at
        FROM members
        WHERE name = $1 AND phone = $2
        "#,
    )
    .bind(name)
    .bind(normalize_phone(phone))
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

/// Look a member up for password recovery
pub async fn find_member_by_email_and_phone(
    pool: &PgPool,
    email: &str,
    phone: &str,
) -> Result<Option<Member>, sqlx::Error> {
    let member = sqlx::query_as::<_, Member>(
        r#"
        SELECT id, email, password_hash, name, phone, nickname, created_at, updated_at
        FROM members
        WHERE email = $1 AND phone = $2
        "#,
    )
    .bind(email)
    .bind(normalize_phone(phone))
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub async fn update_password_hash(pool: &PgPool, member_id: Uuid, password_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE members SET password_hash = $1, updated_at = $2 WHERE id = $3")
        .bind(password_hash)
        .bind(Utc::now())
        .bind(member_id)
        .execute(pool)
        .await?;

    Ok(())
}
