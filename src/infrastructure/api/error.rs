use crate::shared::AppError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response body: {0}")]
    Body(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Request(inner) => AppError::Transport(inner.to_string()),
            ApiError::Status { status, message } => match status.as_u16() {
                404 => AppError::NotFound(message),
                409 => AppError::Conflict(message),
                422 => AppError::Validation(message),
                _ => AppError::Internal(message),
            },
            ApiError::Body(message) => AppError::Internal(message),
        }
    }
}
