//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use accounts_domain::error::{AccountError, NotFoundError, ValidationError};

use crate::content_type::JSON;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure an HTTP handler can produce, mapped to a status code.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the application layer.
    Domain(AccountError),
    /// A write request did not declare `application/json`.
    UnsupportedMediaType,
    /// Known path, unsupported HTTP method.
    MethodNotAllowed,
    /// No route matches the requested path.
    RouteNotFound,
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self::Domain(err.into())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(AccountError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(AccountError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(AccountError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Content-Type must be {JSON}"),
            ),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
