//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, tracing and fallback
//! └── api_routes.rs   - Auth, comment and review endpoints
//! ```
//!
//! # Example
//!
//! ```rust
//! use eatery_reviews::backend::routes::create_router;
//! use eatery_reviews::backend::server::state::AppState;
//! use eatery_reviews::shared::AppConfig;
//!
//! let router = create_router(AppState::in_memory(AppConfig::default()));
//! ```

pub mod router;

pub mod api_routes;

pub use router::create_router;
