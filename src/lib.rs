//! Star Wars Favorites API - Main Library
//!
//! A small REST backend that serves the Star Wars catalog (planets and people)
//! and keeps a per-user list of favorites. Users log in with email and password
//! and receive a JWT bearer token for the protected routes.
//!
//! # Module Structure
//!
//! - **`shared`** - Public JSON shapes (planets, people, user profiles)
//! - **`backend`** - Axum server, handlers, datastore access and auth
//!
//! # Usage
//!
//! ```rust,no_run
//! use starwars_api::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Datastore
//!
//! Persistence goes through sqlx's `Any` driver. A `postgres://` URL selects
//! PostgreSQL, a `sqlite:` URL selects SQLite. Without `DATABASE_URL` the
//! server falls back to a local SQLite file.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
