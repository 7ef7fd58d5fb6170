//! Catalog Module
//!
//! Planets and people: read-only reference data shared by every user.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_person, get_planet, list_people, list_planets};
