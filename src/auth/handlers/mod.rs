//! Authentication and profile handlers
//!
//! - `POST /api/auth/signup` - registration
//! - `POST /api/auth/login` - authentication
//! - `GET /api/auth/me` - current user (requires auth)
//! - `PUT /api/auth/update-profile` - partial profile update (requires auth)

/// Request/response types shared by the handlers
pub mod types;

/// User registration
pub mod signup;

/// User login
pub mod login;

/// Current user lookup
pub mod me;

/// Partial profile update
pub mod update_profile;

pub use signup::signup;
pub use login::login;
pub use me::get_me;
pub use update_profile::update_profile;
