//! Favorites Module
//!
//! Per-user sets of favorite planets and people. A user owns their
//! memberships; the catalog rows themselves are shared.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    add_favorite_person, add_favorite_planet, get_user_favorites, remove_favorite_person,
    remove_favorite_planet,
};
