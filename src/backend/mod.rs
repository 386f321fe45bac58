//! Backend Module
//!
//! All server-side code: an axum HTTP server with PostgreSQL persistence
//! (or an in-memory comment store when no database is configured).
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`comments`** - Comment thread engine and its stores
//! - **`reviews`** - Reviews with image URLs
//! - **`auth`** - Members, JWT sessions, account recovery
//! - **`middleware`** - Bearer token authentication
//! - **`error`** - Backend-specific error type
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── comments/       - Comment threads
//! ├── reviews/        - Reviews
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; the error knows its status code
//! and renders as `{"error": ..., "status": ...}`.

pub mod server;

pub mod routes;

pub mod comments;

pub mod reviews;

pub mod error;

pub mod auth;

pub mod middleware;

pub use server::create_app;
pub use error::BackendError;
