//! Comments on posts
//!
//! Comment storage and handlers. The post↔comment link is a foreign key
//! with cascade delete, so the collection invariant holds structurally.

/// Comment model and database operations
pub mod db;

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_comment, delete_comment, list_comments};
