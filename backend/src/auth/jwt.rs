//! JWT token generation and validation
//!
//! Provides stateless session tokens with pre-computed keys. Tokens are
//! minted at signup/login and expire after a fixed TTL; there is no
//! server-side revocation.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email of the authenticated user
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Token verification failure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Uses pre-computed keys to avoid expensive key derivation on every
/// request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_ttl_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, token_ttl_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_ttl_secs,
        }
    }

    /// Mint a session token for an authenticated user
    pub fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Expiry is evaluated against the local clock with zero leeway; clock
    /// skew is not compensated.
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        match decode::<Claims>(token, self.keys.decoding(), &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(TokenError::Expired),
            Err(_) => Err(TokenError::Invalid),
        }
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_generate_and_verify_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_token(user_id, "student@example.com").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "student@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected_as_expired() {
        // Negative TTL puts exp in the past
        let service = JwtService::new("test-secret", -10);
        let user_id = Uuid::new_v4();

        let token = service.generate_token(user_id, "student@example.com").unwrap();
        let result = service.verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        let result = service.verify_token("invalid.token.here");

        assert_eq!(result.unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_wrong_secret_rejected_as_invalid() {
        let service = create_test_service();
        let other = JwtService::new("other-secret", 3600);
        let user_id = Uuid::new_v4();

        let token = other.generate_token(user_id, "student@example.com").unwrap();
        let result = service.verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let mut token = service.generate_token(user_id, "student@example.com").unwrap();
        token.pop();
        token.push('x');

        assert_eq!(service.verify_token(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
