//! Error handling utilities for API responses.
//!
//! Provides conversion between service-layer errors and HTTP responses.
//!
//! # Response Format
//! All errors return a JSON body containing a single human-readable
//! `message` field. Internal failures are logged server-side and surface to
//! the client only as a generic "Server error" — no query text or stack
//! detail leaves the process.
//!
//! # Error Handling Flow
//! 1. Service layer returns a domain-specific `ServiceError`
//! 2. `service_error_to_http` converts it to a status code and body

use crate::errors::ServiceError;
use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Error body returned by all failing endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub message: String,
}

/// Converts ServiceError to the appropriate HTTP response
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<ErrorBody>) {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::DuplicateAccount => {
            (StatusCode::BAD_REQUEST, "User already exists".to_string())
        }
        ServiceError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "Invalid email or password".to_string(),
        ),
        ServiceError::NotFound { entity, .. } => {
            (StatusCode::NOT_FOUND, format!("{} not found", entity))
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
        }
    };

    (status, Json(ErrorBody { message }))
}
