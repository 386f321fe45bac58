//! Authentication Module
//!
//! Member registration, login sessions and account recovery.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs             - Module exports and documentation
//! ├── members.rs         - Member model and database operations
//! ├── sessions.rs        - Access/refresh JWT issue and verification
//! ├── refresh_tokens.rs  - Server-side refresh token storage
//! ├── cookie.rs          - refreshToken cookie helpers
//! └── handlers/          - HTTP handlers
//! ```
//!
//! # Session Flow
//!
//! 1. **Login**: credentials verified → access token in the body, refresh
//!    token stored per e-mail and set as an `HttpOnly` cookie
//! 2. **Requests**: `Authorization: Bearer <access token>`
//! 3. **Refresh**: e-mail in the body → new access token if the stored
//!    refresh token is still valid
//! 4. **Logout**: stored refresh token revoked, cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Refresh tokens are rejected where an access token is expected
//! - Invalid credentials return 401 (no information leakage)

/// Member data model and database operations
pub mod members;

/// JWT token generation and validation
pub mod sessions;

/// Refresh token storage
pub mod refresh_tokens;

pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{check_email, find_email, find_password, get_me, login, logout, refresh, register};
pub use sessions::{Claims, TokenError, TokenKind, TokenService};
