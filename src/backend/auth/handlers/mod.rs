//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - User authentication handler
//! ├── me.rs       - Current user handler
//! └── list.rs     - User listing handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /login - verify credentials, issue a token
//! - **`current_user`** - GET /current-user - profile of the token holder
//! - **`list_users`** - GET /users - every user's profile

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// User listing handler
pub mod list;

// Re-export commonly used types
pub use types::{LoginRequest, TokenResponse};

// Re-export handlers
pub use list::list_users;
pub use login::login;
pub use me::current_user;
