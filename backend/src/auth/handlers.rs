//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for signup, login, and
//! profile access, parse request data, and interact with the `auth::service`
//! for core business logic.

use crate::api::common::{ErrorBody, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::utils::jwt::{Claims, JwtUtils};
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle account creation request
#[axum::debug_handler]
pub async fn signup(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, ResponseJson<AuthResponse>), (StatusCode, ResponseJson<ErrorBody>)> {
    let auth_service = AuthService::new(&pool, &jwt_utils);

    match auth_service.signup(payload).await {
        Ok(response) => Ok((StatusCode::CREATED, ResponseJson(response))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<AuthResponse>, (StatusCode, ResponseJson<ErrorBody>)> {
    let auth_service = AuthService::new(&pool, &jwt_utils);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get the current user's profile from their verified token
#[axum::debug_handler]
pub async fn profile(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<ProfileResponse>, (StatusCode, ResponseJson<ErrorBody>)> {
    let auth_service = AuthService::new(&pool, &jwt_utils);

    match auth_service.profile(claims.user_id()).await {
        Ok(user) => Ok(ResponseJson(ProfileResponse { user })),
        Err(error) => Err(service_error_to_http(error)),
    }
}
