//! Server Module
//!
//! Initialization and configuration of the axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database loading and migrations
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env()` in the binary
//! 2. **Database**: pool + migrations when `DATABASE_URL` is set
//! 3. **State**: token service and comment service over the chosen store
//! 4. **Router**: routes, auth middleware and request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use eatery_reviews::backend::server::create_app;
//! use eatery_reviews::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod state;

pub mod config;

pub mod init;

pub use state::{require_pool, AppState};
pub use init::create_app;
