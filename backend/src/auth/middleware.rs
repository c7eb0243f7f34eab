//! Middleware for protecting authenticated routes.
//!
//! This module contains logic for extracting and verifying bearer tokens
//! before a protected handler runs.

use crate::utils::jwt::{JwtUtils, TokenVerification};
use axum::{
    Extension,
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware.
///
/// A missing header or missing `Bearer ` prefix is a 401; a token that fails
/// verification (tampered, malformed, or expired) is a 403. On success the
/// verified claims are attached to the request for handlers to consume.
pub async fn jwt_auth(
    Extension(jwt_utils): Extension<JwtUtils>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Check if it's a Bearer token
    if !auth_header.starts_with("Bearer ") {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    match jwt_utils.verify_token(token) {
        TokenVerification::Valid(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        TokenVerification::Expired | TokenVerification::Invalid => Err(StatusCode::FORBIDDEN),
    }
}
