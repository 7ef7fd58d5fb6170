//! Backend Module
//!
//! All server-side code: the Axum HTTP server, route handlers, datastore
//! access and token authentication.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, datastore connection, application state
//! - **`routes`** - Router assembly, sitemap and fallback
//! - **`auth`** - Users, password hashing, JWT tokens, login handlers
//! - **`catalog`** - Planets and people
//! - **`favorites`** - Per-user favorite planets and people
//! - **`middleware`** - Bearer token extractor for protected routes
//! - **`error`** - The `ApiError` taxonomy and its JSON envelope
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, database, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── catalog/        - Planets and people
//! ├── favorites/      - Favorites
//! ├── middleware/     - Auth extractor
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool and the token service. Handlers pull
//! the piece they need with `State<DbPool>` or `State<TokenService>` through
//! `FromRef`, so every datastore call gets its pool passed in explicitly.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. `ApiError` implements
//! `IntoResponse` and renders `{"msg": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Planet and people catalog
pub mod catalog;

/// Favorite planets and people
pub mod favorites;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
