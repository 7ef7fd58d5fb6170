//! Authentication Module
//!
//! Users, password hashing, bearer tokens and the login/current-user
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → bcrypt verification → JWT with the user id as `sub`
//! 2. **Protected routes**: `Authorization: Bearer <token>` → token verified → user loaded
//!
//! # Security
//!
//! - Passwords are stored as salted bcrypt hashes
//! - Tokens are stateless and expire (15 minutes by default)
//! - Every login failure returns the same 401 body

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, TokenResponse};
pub use handlers::{current_user, list_users, login};
pub use sessions::{Claims, TokenService};
