//! Driftlog - geotagged social-posting backend
//!
//! Driftlog is a REST backend for a small travel-journal style social app:
//! users sign up and log in, publish geotagged posts (optionally enriched
//! with a weather snapshot at creation time), comment on posts, toggle
//! likes, and upload profile pictures to an external image host.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, application state, app construction
//! - **`routes`** - router assembly and the API route table
//! - **`middleware`** - the authentication gateway (bearer-token extractor)
//! - **`error`** - the `ApiError` taxonomy and its JSON response conversion
//! - **`auth`** - JWT tokens, user records, auth/profile handlers
//! - **`posts`** - post store, weather enrichment client, post handlers
//! - **`comments`** - comment store and handlers
//! - **`profile`** - image-host client and the upload handler
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>` and propagate with `?`. Ownership
//! and existence checks always run before any mutation; store and
//! collaborator failures are logged server-side and surface to clients as a
//! generic error.
//!
//! # Concurrency
//!
//! There is no in-process shared mutable state beyond the connection pool.
//! The two operations that would race as read-modify-write cycles, like
//! toggling and comment create/delete, are single atomic SQL statements.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// API error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Geotagged posts
pub mod posts;

/// Comments on posts
pub mod comments;

/// Profile picture uploads
pub mod profile;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
