//! Route configuration
//!
//! Router assembly and the API route table.

/// Router assembly
pub mod router;

/// API route table
pub mod api_routes;

pub use router::create_router;
