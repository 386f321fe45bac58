//! Comments Module
//!
//! Nested comment threads on eateries.
//!
//! # Module Structure
//!
//! ```text
//! comments/
//! ├── mod.rs      - Module exports and documentation
//! ├── thread.rs   - Comment model and the thread engine (create/list/update/delete)
//! ├── store.rs    - Storage contract used by the engine
//! ├── memory.rs   - In-memory arena store
//! ├── db.rs       - PostgreSQL store (one transaction per store value)
//! ├── service.rs  - Transaction boundary, backend selection
//! └── handlers.rs - HTTP handlers
//! ```

pub mod thread;
pub mod store;
pub mod memory;
pub mod db;
pub mod service;
pub mod handlers;

pub use thread::{Comment, CommentDraft, CommentId, DeleteOutcome, EateryId, ThreadError, DELETED_PLACEHOLDER};
pub use store::{CommentStore, StoreError};
pub use memory::MemoryCommentStore;
pub use service::CommentService;
pub use handlers::{create_comment, delete_comment, list_comments_by_eatery, list_comments_by_member, update_comment};
