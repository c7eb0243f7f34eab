//! Data structures for persisted entities.
//!
//! These models map directly onto database rows. The `User` struct carries the
//! password hash and therefore never derives `Serialize`; responses use
//! `auth::models::UserInfo` instead.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user account as stored in the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Signup data as received from the client, before hashing.
#[derive(Debug, Clone)]
pub struct CreateNewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fully-prepared insert row for the `users` table.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// One tee-time row joined with its course.
#[derive(Debug, Clone, FromRow)]
pub struct TeeTimeSlot {
    pub id: String,
    pub tee_time: DateTime<Utc>,
    pub hole_count: i64,
    pub spots_left: i64,
    pub price_walk: f64,
    pub price_with_cart: f64,
    pub course_name: String,
    pub course_state: String,
}
