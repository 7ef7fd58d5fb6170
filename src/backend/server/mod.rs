//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── database.rs     - Connection pool and migrations
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Datastore**: connect and migrate (`load_database`)
//! 3. **State Creation**: pool + token service in `AppState`
//! 4. **Router Creation**: all routes, CORS and request tracing

/// Server configuration loading
pub mod config;

/// Datastore connection and migrations
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use database::DbPool;
pub use init::{create_app, create_state};
pub use state::AppState;
