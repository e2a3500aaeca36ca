//! Standard error body and `DomainError` → HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| {
            serde_json::Value::Object(
                err.details
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
        });
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::OutOfRange => StatusCode::BAD_REQUEST,
        ErrorCode::ActivityNotFound | ErrorCode::SegmentNotFound | ErrorCode::RoutineNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::ConcurrentModification => StatusCode::CONFLICT,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a domain error. Server-side failures are logged and their
/// message is not echoed to the client.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = status_for(err.code);
    if status.is_server_error() {
        tracing::error!(code = %err.code, error = %err.message, "Request failed");
        return (
            status,
            Json(ErrorResponse {
                code: err.code.to_string(),
                ..ErrorResponse::internal("An internal error occurred")
            }),
        )
            .into_response();
    }
    (status, Json(ErrorResponse::from(&err))).into_response()
}
