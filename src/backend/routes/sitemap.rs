//! Sitemap and fallback
//!
//! `GET /` lists the API endpoints as a small HTML page. Unknown paths get
//! the JSON 404 envelope.

use axum::response::Html;

use crate::backend::error::ApiError;

/// Every endpoint served by the API, as (method, path)
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/users"),
    ("GET", "/users/favorites/"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
    ("POST", "/login"),
    ("GET", "/current-user"),
];

/// GET /
pub async fn sitemap() -> Html<String> {
    let items: String = ENDPOINTS
        .iter()
        .map(|(method, path)| format!("<li><code>{} {}</code></li>", method, path))
        .collect();

    Html(format!(
        "<h1>Star Wars API</h1><p>Available endpoints:</p><ul>{}</ul>",
        items
    ))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Resource not found")
}
