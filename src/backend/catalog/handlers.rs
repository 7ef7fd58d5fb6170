//! Catalog HTTP Handlers
//!
//! Public, read-only routes over planets and people. Lookups by id map an
//! absent row to 404.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::db;
use crate::backend::error::ApiError;
use crate::backend::server::database::DbPool;
use crate::shared::catalog::{Person, Planet};

/// Planet id from the path; an id that is not an integer names no planet
pub(crate) fn planet_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Unparseable planet id: {}", rejection.body_text());
        ApiError::not_found("Planet not found")
    })
}

/// Person id from the path; an id that is not an integer names no person
pub(crate) fn person_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Unparseable person id: {}", rejection.body_text());
        ApiError::not_found("Person not found")
    })
}

/// GET /planets
pub async fn list_planets(State(pool): State<DbPool>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = db::list_planets(&pool).await?;
    tracing::debug!("Listing {} planets", planets.len());
    Ok(Json(planets))
}

/// GET /planets/{id}
pub async fn get_planet(
    State(pool): State<DbPool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Planet>, ApiError> {
    let planet_id = planet_id(path)?;
    let planet = db::get_planet_by_id(&pool, planet_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Planet not found: {}", planet_id);
            ApiError::not_found("Planet not found")
        })?;

    Ok(Json(planet))
}

/// GET /people
pub async fn list_people(State(pool): State<DbPool>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = db::list_people(&pool).await?;
    tracing::debug!("Listing {} people", people.len());
    Ok(Json(people))
}

/// GET /people/{id}
pub async fn get_person(
    State(pool): State<DbPool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let person_id = person_id(path)?;
    let person = db::get_person_by_id(&pool, person_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Person not found: {}", person_id);
            ApiError::not_found("Person not found")
        })?;

    Ok(Json(person))
}
