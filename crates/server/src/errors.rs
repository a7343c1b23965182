use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::ServiceError;
use thiserror::Error;

/// Errors surfaced to HTTP clients. Internal causes are logged, never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to save module")]
    SaveFailed,
    #[error("Failed to load modules")]
    LoadFailed,
    #[error("Validation Error")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::SaveFailed | ApiError::LoadFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(self.to_string()))
            }
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorBody::with_message(self.to_string(), msg.clone()))
            }
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
