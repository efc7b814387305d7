//! Authentication and user management
//!
//! This module owns everything identity-related:
//!
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - user records and profile updates
//! - **`handlers`** - signup/login/me/update-profile HTTP handlers
//!
//! The request-level gate that *consumes* these tokens lives in
//! `crate::middleware::auth`.

/// JWT tokens
pub mod sessions;

/// User model and database operations
pub mod users;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_me, login, signup, update_profile};
