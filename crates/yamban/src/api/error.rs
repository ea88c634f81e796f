//! Mapping of repository outcomes onto HTTP status codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use yamban_app::RepositoryError;

/// Error payload: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short human-readable message.
    pub detail: String,
}

/// API-level failure mapped onto a status code.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a message naming the offending field.
    BadRequest(String),
    /// 404 for unknown task ids.
    NotFound(&'static str),
    /// 500 for storage failures.
    Internal(String),
}

impl ApiError {
    /// The canonical unknown-id failure.
    pub const fn task_not_found() -> Self {
        Self::NotFound("Task not found")
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Invalid(inner) => Self::BadRequest(inner.to_string()),
            RepositoryError::Storage(inner) => {
                tracing::error!(error = %inner, "storage failure");
                Self::Internal(inner.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, detail.to_owned()),
            Self::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
