//! Reviews Module
//!
//! Star-rated reviews of eateries with attached image URLs.
//!
//! ```text
//! reviews/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Review and image persistence
//! └── handlers.rs - HTTP handlers
//! ```

pub mod db;
pub mod handlers;

pub use handlers::{create_review, delete_review, list_review_images, list_reviews_by_eatery};
