//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation
//! ├── api_routes.rs     - Login, current user, users
//! ├── catalog_routes.rs - Planets, people and favorites
//! └── sitemap.rs        - Endpoint index and 404 fallback
//! ```
//!
//! Protected routes are not wrapped in a layer: their handlers take an
//! `AuthUser` extractor, which rejects with 401 before the handler body runs.

/// Main router creation
pub mod router;

/// Authentication and user routes
pub mod api_routes;

/// Catalog and favorites routes
pub mod catalog_routes;

/// Endpoint index and fallback
pub mod sitemap;

// Re-export commonly used functions
pub use router::create_router;
