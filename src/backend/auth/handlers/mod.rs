//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Registration and e-mail availability
//! ├── login.rs     - Credential check, token issue
//! ├── logout.rs    - Refresh token revocation
//! ├── refresh.rs   - New access token from the stored refresh token
//! ├── recovery.rs  - E-mail and password recovery
//! └── me.rs        - Current member
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register
//! - **`check_email`** - GET /auth/check-email
//! - **`login`** - POST /auth/login
//! - **`logout`** - POST /auth/logout
//! - **`refresh`** - POST /auth/refresh
//! - **`find_email`** - POST /auth/find-email
//! - **`find_password`** - POST /auth/find-password
//! - **`get_me`** - GET /auth/me

/// Request and response types
pub mod types;

pub mod register;

pub mod login;

pub mod logout;

pub mod refresh;

pub mod recovery;

pub mod me;

pub use types::{LoginRequest, LoginResponse, MemberResponse, RegisterRequest};

pub use register::{check_email, register};
pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use recovery::{find_email, find_password};
pub use me::get_me;
