use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shipdeck_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for registry errors and adds a variant for requests
/// whose body or query string could not be decoded at all. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An error from the project registry.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request parameters could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Parameter rejections ---
            AppError::Core(core @ CoreError::InvalidParam { .. }) => {
                (StatusCode::BAD_REQUEST, "PARAM_ERROR", core.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "PARAM_ERROR", msg.clone()),

            // --- Application failures ---
            AppError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Core(core @ CoreError::Storage(_)) => {
                tracing::error!(error = %core, "Application error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "APP_ERROR",
                    core.to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::Core(CoreError::InvalidParam { field, .. }) = &self {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}
