//! Error types for the HTTP layer
//!
//! The cache itself cannot fail; these cover request validation and routing.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Client-facing error returned by the request handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// `key` was not supplied or was empty
    #[error("Key parameter is required")]
    MissingKey,

    /// `key` or `value` is longer than the allowed number of characters
    #[error("Exceeds maximum of {max} characters")]
    ValueTooLong { max: usize },

    /// The query string could not be decoded
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// No route matched the request
    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingKey | ApiError::ValueTooLong { .. } | ApiError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
