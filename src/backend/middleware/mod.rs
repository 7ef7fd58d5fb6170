//! Middleware Module
//!
//! Request processing that runs before handlers. Currently the bearer
//! token extractor used by every protected route.

pub mod auth;

pub use auth::{authenticate, bearer_token, AuthUser, AuthenticatedUser};
