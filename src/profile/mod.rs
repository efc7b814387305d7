//! Profile picture uploads
//!
//! The image-host client and the multipart upload handler.

/// Image host client
pub mod images;

/// HTTP handlers
pub mod handlers;

pub use handlers::upload_profile_picture;
pub use images::ImageHost;
