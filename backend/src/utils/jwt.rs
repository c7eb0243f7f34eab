//! JWT token utilities for authentication.
//!
//! Provides session token creation, verification, and claims management.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};

/// JWT claims carried by a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// Outcome of verifying a bearer token.
///
/// A tampered or malformed token is indistinguishable from one signed with
/// the wrong key; only a well-signed token past its expiry is `Expired`.
#[derive(Debug)]
pub enum TokenVerification {
    Valid(Claims),
    Expired,
    Invalid,
}

/// JWT token utility for creating and verifying tokens.
///
/// Built once at startup from the configured signing secret and shared with
/// handlers and middleware via an axum `Extension`.
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the signing secret
    pub fn new(secret: &str, expires_in_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    /// Generate a signed token embedding the user id as subject
    pub fn issue_token(&self, user_id: &str) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Verify a token's signature and expiry
    pub fn verify_token(&self, token: &str) -> TokenVerification {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => TokenVerification::Valid(token_data.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature => TokenVerification::Expired,
                _ => TokenVerification::Invalid,
            },
        }
    }
}
