/**
 * Error Conversion
 *
 * Turns `ApiError` into an HTTP response, and folds the JSON body
 * rejection into `ApiError` so malformed requests share the same envelope.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "msg": "Error message",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body = serde_json::json!({
            "msg": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::application(rejection.status(), rejection.body_text())
    }
}
