use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::user_actor::UserError;

/// Request-scoped failures. Each one renders as `{"error": <message>}`.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Not Found")]
    NotFound,
    #[error("Invalid JSON body")]
    MalformedBody,
    #[error("Internal Server Error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::ValidationError(msg) => ApiError::Validation(msg),
            UserError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!(detail = %detail, "Request failed");
        }
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
