//! Server setup
//!
//! Configuration loading, application state, and app construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration, loaded once
//! └── init.rs   - Database pool, clients, app creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
