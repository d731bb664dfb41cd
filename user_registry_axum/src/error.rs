use axum::response::Json;
use http::StatusCode;
use serde_json::{Value, json};

use user_registry::RegistryError;

/// Helper trait for converting service errors to the wire error format
pub(crate) trait IntoResponseError<T> {
    /// Map failures to `(status, {"error": ...})`. A missing record becomes
    /// 404 with the fixed not-found body. Everything else becomes 500
    /// carrying `message`, with the real cause kept in the log only.
    fn into_response_error(self, message: &str) -> Result<T, (StatusCode, Json<Value>)>;
}

impl<T> IntoResponseError<T> for Result<T, RegistryError> {
    fn into_response_error(self, message: &str) -> Result<T, (StatusCode, Json<Value>)> {
        self.map_err(|e| match e {
            RegistryError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "User not found" })),
            ),
            RegistryError::Storage(err) => {
                tracing::error!("{}: {}", message, err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
            }
        })
    }
}
