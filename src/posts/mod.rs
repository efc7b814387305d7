//! Geotagged posts
//!
//! Post storage, the weather enrichment client, and the post HTTP handlers.
//!
//! A post belongs to exactly one author and carries an optional weather
//! snapshot captured at creation time. The like-set and comment collection
//! are relational (the `likes` and `comments` tables), so membership changes
//! are atomic single statements.

/// Post model and database operations
pub mod db;

/// Weather enrichment client
pub mod weather;

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_posts, toggle_like, update_post};
pub use weather::{WeatherClient, WeatherSnapshot};
