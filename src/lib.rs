//! Eatery Reviews - Main Library
//!
//! Eatery Reviews is the backend for a restaurant-review site: members sign up
//! and authenticate with JWT access/refresh tokens, discuss eateries in nested
//! comment threads, and post reviews with attached images.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - Comment and review request/response types
//!   - Application configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - Comment thread engine and its stores (PostgreSQL, in-memory)
//!   - Authentication, reviews
//!
//! # Usage
//!
//! ```rust,no_run
//! use eatery_reviews::backend::server::init::create_app;
//! use eatery_reviews::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error`, `backend::error` and
//!   `backend::comments::thread`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
