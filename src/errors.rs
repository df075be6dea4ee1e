use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::Serialize;

/// Body shape for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status category (e.g. "Not Found", "Bad Request").
    pub error: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// ISO 8601 timestamp when the error occurred.
    pub timestamp: String,
}

/// Failures surfaced at the handler boundary. Every variant converts to an
/// HTTP response; nothing here is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Store failure on a read path.
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    /// Update/delete target key matched no record.
    #[error("{0}")]
    NotFound(String),

    /// Path parameter that cannot be parsed into a native record id.
    #[error("{0}")]
    MalformedKey(String),

    /// Store failure while writing a record; reported as a bad request,
    /// mirroring the contract the dashboards were built against.
    #[error("{0}")]
    WriteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::MalformedKey(_) | ServiceError::WriteFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::DatabaseError(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
