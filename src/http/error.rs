//! Error rendering for the task API.

use crate::task::{domain::TaskDomainError, services::TaskServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use tracing::error;

/// Boundary error rendered as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// A request field failed validation; rendered as a field-keyed
    /// JSON object with status 400.
    Validation {
        /// Offending field name.
        field: &'static str,
        /// Human-readable message.
        message: &'static str,
    },
    /// A malformed query parameter; rendered as plain text with 400.
    BadRequest(String),
    /// The referenced task does not exist; rendered as plain text with
    /// 404. The message is the response body verbatim.
    NotFound(String),
    /// Storage failure; the detail is logged, the body stays opaque.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { field, message } => {
                let mut body = Map::new();
                body.insert(field.to_owned(), Value::String(message.to_owned()));
                (StatusCode::BAD_REQUEST, Json(Value::Object(body))).into_response()
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Internal(detail) => {
                error!("task API internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(_) => Self::NotFound(err.to_string()),
            TaskServiceError::Repository(repository_err) => {
                Self::Internal(repository_err.to_string())
            }
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::EmptyName => Self::Validation {
                field: "name",
                message: "Name is mandatory",
            },
        }
    }
}
