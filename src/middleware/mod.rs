//! Request middleware
//!
//! Currently just the authentication gateway.

/// Authentication gateway (bearer-token extractor)
pub mod auth;

pub use auth::AuthUser;
