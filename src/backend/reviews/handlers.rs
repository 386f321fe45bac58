//! Review HTTP Handlers
//!
//! All of these need PostgreSQL and answer 503 without it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::reviews::db::{
    create_review_with_images, delete_review as delete_review_row, get_review_author, get_review_images,
    get_reviews_by_eatery, NewReview,
};
use crate::backend::server::state::require_pool;
use crate::shared::review::{CreateReviewRequest, ReviewImageResponse, ReviewResponse};

/// `POST /api/reviews`
pub async fn create_review(
    State(pool): State<Option<PgPool>>,
    AuthUser(member): AuthUser,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), BackendError> {
    let pool = require_pool(pool)?;
    request.validate()?;

    let review = create_review_with_images(
        &pool,
        NewReview {
            member_id: member.member_id,
            eatery_id: request.eatery_id,
            content: request.content,
            rating: request.rating,
            image_urls: request.image_urls,
        },
    )
    .await?;

    tracing::info!(
        "Member {} reviewed eatery {} ({} images)",
        member.member_id,
        review.eatery_id,
        review.images.len()
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// `GET /api/reviews/eatery/{eatery_id}`
pub async fn list_reviews_by_eatery(
    State(pool): State<Option<PgPool>>,
    Path(eatery_id): Path<i64>,
) -> Result<Json<Vec<ReviewResponse>>, BackendError> {
    let pool = require_pool(pool)?;
    Ok(Json(get_reviews_by_eatery(&pool, eatery_id).await?))
}

/// `GET /api/reviews/{id}/images`
pub async fn list_review_images(
    State(pool): State<Option<PgPool>>,
    Path(review_id): Path<i64>,
) -> Result<Json<Vec<ReviewImageResponse>>, BackendError> {
    let pool = require_pool(pool)?;
    if get_review_author(&pool, review_id).await?.is_none() {
        return Err(BackendError::not_found(format!("review {} not found", review_id)));
    }
    Ok(Json(get_review_images(&pool, review_id).await?))
}

/// `DELETE /api/reviews/{id}`, author only
pub async fn delete_review(
    State(pool): State<Option<PgPool>>,
    AuthUser(member): AuthUser,
    Path(review_id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    let pool = require_pool(pool)?;

    let author = get_review_author(&pool, review_id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("review {} not found", review_id)))?;
    if author != member.member_id {
        tracing::warn!("Member {} tried to delete review {} of {}", member.member_id, review_id, author);
        return Err(BackendError::handler(StatusCode::FORBIDDEN, "Only the author can delete a review"));
    }

    if !delete_review_row(&pool, review_id).await? {
        return Err(BackendError::not_found(format!("review {} not found", review_id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
