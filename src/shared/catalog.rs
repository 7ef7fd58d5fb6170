//! Catalog entities
//!
//! Planets and people are read-only reference data. Their descriptive
//! attributes are free-form strings taken verbatim from the catalog
//! (`"unknown"`, `"1,000,000"` and friends are all valid), so they are kept
//! as optional strings rather than parsed numbers.

use serde::{Deserialize, Serialize};

/// A planet as stored and as serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
}

/// A character ("people" in the routes) as stored and as serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}
