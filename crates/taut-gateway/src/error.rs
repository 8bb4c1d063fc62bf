use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use taut_engine::EngineError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidUrl(message) => Self::InvalidRequest(message),
            EngineError::UnknownCode(code) => Self::NotFound(code),
            EngineError::Store(message) => Self::Internal(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, format!("Error 400: {message}")).into_response()
            }
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Error 404: Not found").into_response()
            }
            AppError::Internal(message) => {
                // Store faults are logged here; the body stays generic so
                // backend details never reach clients.
                error!(%message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error 500: Internal server error",
                )
                    .into_response()
            }
        }
    }
}
