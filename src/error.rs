use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors of the JSON API, rendered as `{"detail": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    /// Logged with its cause; the client only sees the public message.
    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, cause: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message,
            cause: cause.into(),
        }
    }

    /// Maps a domain error, using `message` for anything unexpected.
    pub fn from_domain(message: &'static str, err: frontier_shared::Error) -> Self {
        match err {
            frontier_shared::Error::NotFound => Self::NotFound("Message not found".to_owned()),
            frontier_shared::Error::Validate(errors) => Self::Unprocessable(errors.to_string()),
            err => Self::internal(message, anyhow::anyhow!(err)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Unprocessable(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::Internal { message, cause } => {
                tracing::error!(error = %cause, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
