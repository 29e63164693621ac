/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers can
 * return them directly. The body is always:
 *
 * ```json
 * { "error": "Error message" }
 * ```
 *
 * 500-class errors are logged here with their full cause and sent to the
 * client with an opaque message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let body = ErrorBody {
            error: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
