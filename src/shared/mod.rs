//! Shared Module
//!
//! Public JSON shapes returned by the API. Every entity that leaves the server
//! goes through one of these types, so this module is the single place that
//! decides which fields are public.

/// Planets and people
pub mod catalog;

/// User profile with favorites
pub mod user;

/// Re-export commonly used types for convenience
pub use catalog::{Person, Planet};
pub use user::{CurrentUserResponse, UserProfile};
