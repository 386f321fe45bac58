//! Middleware Module
//!
//! - **`auth`** - bearer access token check for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use eatery_reviews::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/api/comments", post(create_comment))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedMember};
