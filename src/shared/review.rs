//! Review request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Maximum number of images attached to one review
pub const MAX_REVIEW_IMAGES: usize = 10;

/// Request body for `POST /api/reviews`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateReviewRequest {
    pub eatery_id: i64,
    pub content: String,
    /// Star rating, 1 to 5
    pub rating: i16,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.content.trim().is_empty() {
            return Err(SharedError::validation("content", "Review content cannot be empty"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(SharedError::validation("rating", "Rating must be between 1 and 5"));
        }
        if self.image_urls.len() > MAX_REVIEW_IMAGES {
            return Err(SharedError::validation(
                "image_urls",
                format!("A review can carry at most {} images", MAX_REVIEW_IMAGES),
            ));
        }
        if self.image_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(SharedError::validation("image_urls", "Image URLs cannot be empty"));
        }
        Ok(())
    }
}

/// An image attached to a review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewImageResponse {
    pub id: i64,
    pub review_id: i64,
    pub image_url: String,
}

/// A review with its images
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewResponse {
    pub id: i64,
    pub member_id: Uuid,
    pub eatery_id: i64,
    pub content: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
    pub images: Vec<ReviewImageResponse>,
}
