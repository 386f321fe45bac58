/**
 * Review Database Operations
 *
 * Reviews live in `reviews`; their images in `review_images`, which cascade
 * on review deletion. A review and its images are written in one
 * transaction.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::review::{ReviewImageResponse, ReviewResponse};

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    member_id: Uuid,
    eatery_id: i64,
    content: String,
    rating: i16,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewImageRow {
    id: i64,
    review_id: i64,
    image_url: String,
}

impl From<ReviewImageRow> for ReviewImageResponse {
    fn from(row: ReviewImageRow) -> Self {
        Self {
            id: row.id,
            review_id: row.review_id,
            image_url: row.image_url,
        }
    }
}

impl ReviewRow {
    fn into_response(self, images: Vec<ReviewImageResponse>) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            member_id: self.member_id,
            eatery_id: self.eatery_id,
            content: self.content,
            rating: self.rating,
            created_at: self.created_at,
            images,
        }
    }
}

/// Fields of a new review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub member_id: Uuid,
    pub eatery_id: i64,
    pub content: String,
    pub rating: i16,
    pub image_urls: Vec<String>,
}

/// Insert a review and its images atomically
pub async fn create_review_with_images(pool: &PgPool, review: NewReview) -> Result<ReviewResponse, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, ReviewRow>(
        r#"
        INSERT INTO reviews (member_id, eatery_id, content, rating, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, member_id, eatery_id, content, rating, created_at
        "#,
    )
    .bind(review.member_id)
    .bind(review.eatery_id)
    .bind(&review.content)
    .bind(review.rating)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    let mut images = Vec::with_capacity(review.image_urls.len());
    for image_url in &review.image_urls {
        let image = sqlx::query_as::<_, ReviewImageRow>(
            r#"
            INSERT INTO review_images (review_id, image_url)
            VALUES ($1, $2)
            RETURNING id, review_id, image_url
            "#,
        )
        .bind(row.id)
        .bind(image_url)
        .fetch_one(&mut *tx)
        .await?;
        images.push(image.into());
    }

    tx.commit().await?;
    Ok(row.into_response(images))
}

/// Reviews of an eatery, newest first, with their images
pub async fn get_reviews_by_eatery(pool: &PgPool, eatery_id: i64) -> Result<Vec<ReviewResponse>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT id, member_id, eatery_id, content, rating, created_at
        FROM reviews
        WHERE eatery_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(eatery_id)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let image_rows = sqlx::query_as::<_, ReviewImageRow>(
        "SELECT id, review_id, image_url FROM review_images WHERE review_id = ANY($1) ORDER BY id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut images: HashMap<i64, Vec<ReviewImageResponse>> = HashMap::new();
    for image in image_rows {
        images.entry(image.review_id).or_default().push(image.into());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let attached = images.remove(&row.id).unwrap_or_default();
            row.into_response(attached)
        })
        .collect())
}

/// Author of a review, `None` if the review does not exist
pub async fn get_review_author(pool: &PgPool, review_id: i64) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar("SELECT member_id FROM reviews WHERE id = $1")
        .bind(review_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_review_images(pool: &PgPool, review_id: i64) -> Result<Vec<ReviewImageResponse>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReviewImageRow>(
        "SELECT id, review_id, image_url FROM review_images WHERE review_id = $1 ORDER BY id",
    )
    .bind(review_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ReviewImageResponse::from).collect())
}

/// Delete a review; its images go with it
pub async fn delete_review(pool: &PgPool, review_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(review_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
