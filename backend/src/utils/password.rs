//! Password hashing utilities.
//!
//! One-way salted hashing and verification of plaintext passwords against
//! stored bcrypt hashes.

use crate::errors::{ServiceError, ServiceResult};

/// bcrypt work factor for newly created hashes
const HASH_COST: u32 = 10;

/// Hashes a plaintext password before storing it in the database.
///
/// The resulting string is self-describing: it embeds the algorithm version,
/// cost, and salt.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    bcrypt::hash(password, HASH_COST)
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
}

/// Verifies a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch rather than an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
