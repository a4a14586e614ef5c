use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
///
/// Everything is caught at the handler boundary and converted to a JSON
/// `{"error": ...}` payload with a matching status code; nothing propagates
/// to the client as a raw failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or empty client input.
    #[error("{0}")]
    BadRequest(String),

    /// The transcription engine failed.
    #[error("transcription failed: {0}")]
    Engine(String),

    /// Anything else that went wrong server-side.
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Engine(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
