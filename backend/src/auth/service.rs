//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::database::models::CreateNewUser;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for handling signup, login, and profile lookup
pub struct AuthService<'a> {
    jwt_utils: &'a JwtUtils,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: &'a JwtUtils) -> Self {
        AuthService {
            jwt_utils,
            user_service: UserService::new(pool),
        }
    }

    /// Register a new account and issue its first session token
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        validate_request(&request)?;

        let user = self
            .user_service
            .create_user(CreateNewUser {
                name: request.name,
                email: request.email,
                password: request.password,
            })
            .await?;

        let token = self.jwt_utils.issue_token(&user.id)?;

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Authenticate a user and issue a session token
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        validate_request(&request)?;

        let user = self
            .user_service
            .authenticate_user(&request.email, &request.password)
            .await?;

        let token = self.jwt_utils.issue_token(&user.id)?;

        Ok(AuthResponse {
            user: user.into(),
            token,
        })
    }

    /// Fetch the profile for an already-verified identity.
    ///
    /// The account may have disappeared since the token was issued, in which
    /// case this is a not-found rather than an auth failure.
    pub async fn profile(&self, user_id: &str) -> ServiceResult<UserInfo> {
        let user = self.user_service.get_user_required(user_id).await?;
        Ok(user.into())
    }
}

/// Flattens validator errors into a single validation ServiceError
fn validate_request<T: Validate>(request: &T) -> ServiceResult<()> {
    request.validate().map_err(|validation_errors| {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        ServiceError::validation(error_messages.join(", "))
    })
}
