//! # HTTP API Errors
//!
//! Every non-2xx response carries `{"error": "<message>"}`. Internal failures
//! never expose store details; those go to the event log instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::company::NameError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No company with the requested id
    #[error("Company not found")]
    NotFound,

    /// Body lacks a non-empty string `name`
    #[error("Name is required")]
    NameRequired,

    /// Body is not valid JSON
    #[error("Invalid request body")]
    InvalidBody,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store or service failure
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NameRequired | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NameError> for ApiError {
    fn from(_: NameError) -> Self {
        ApiError::NameRequired
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
