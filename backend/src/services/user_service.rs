//! User business logic service.
//!
//! Handles account creation and credential verification.

use crate::database::models::{CreateNewUser, CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::{UserRepository, is_unique_violation};
use crate::utils::password::{hash_password, verify_password};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user account.
    ///
    /// # Arguments
    /// * `create_user` - Signup data with the plaintext password
    ///
    /// # Returns
    /// The newly created User with all fields populated
    ///
    /// # Errors
    /// Returns `ServiceError::DuplicateAccount` when the email is already
    /// registered, `ServiceError` otherwise for store or hashing failures.
    pub async fn create_user(&self, create_user: CreateNewUser) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        if repo.get_user_by_email(&create_user.email).await?.is_some() {
            return Err(ServiceError::DuplicateAccount);
        }

        let password_hash = hash_password(&create_user.password)?;

        let data = CreateUser {
            id: Uuid::now_v7().to_string(),
            name: create_user.name,
            email: create_user.email,
            password_hash,
            created_at: Utc::now(),
        };

        // Concurrent signups can both pass the lookup above; the unique
        // index on users.email is the actual guard.
        match repo.create_user(data).await {
            Ok(user) => Ok(user),
            Err(error) if is_unique_violation(&error) => Err(ServiceError::DuplicateAccount),
            Err(error) => Err(error.into()),
        }
    }

    /// Verifies a user's credentials.
    ///
    /// # Arguments
    /// * `email` - Registered email
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    /// The authenticated User on success
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidCredentials` for an unknown email and
    /// for a wrong password alike, so responses cannot reveal whether an
    /// email is registered.
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        let user = repo
            .get_user_by_email(email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Retrieves a user by ID with existence verification.
    ///
    /// # Arguments
    /// * `id` - User ID (UUID format)
    ///
    /// # Returns
    /// The requested User if found
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the user doesn't exist
    pub async fn get_user_required(&self, id: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;
        Ok(user)
    }
}
