//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use docesabor_core::error::{AppError, ErrorKind};

/// Body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Message, or the list of validation issues.
    pub erro: serde_json::Value,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::validation(rejection.body_text()))
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Precondition => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization | ErrorKind::Ownership => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database
        | ErrorKind::Internal
        | ErrorKind::Configuration
        | ErrorKind::ExternalService
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let erro = if err.kind.is_internal() {
            tracing::error!(kind = %err.kind, error = ?err, "Internal server error");
            serde_json::Value::from("Internal server error")
        } else {
            err.details
                .unwrap_or_else(|| serde_json::Value::from(err.message))
        };

        (status, Json(ApiErrorResponse { erro })).into_response()
    }
}

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;
