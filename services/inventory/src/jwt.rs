//! JWT service for session token generation and validation
//!
//! Tokens are self-contained HS256-signed credentials carrying the user id,
//! issue time, and expiry. Nothing is persisted server-side; possession of a
//! token with a valid signature and an expiry in the future is the session.

use anyhow::Result;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

use crate::error::ApiError;

/// Single error message for every validation failure. The caller must not be
/// able to tell a tampered token from an expired or malformed one.
pub const INVALID_TOKEN: &str = "invalid or expired token";

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric secret used for both signing and verification
    pub secret: String,
    /// Token lifetime in seconds (default: 24 hours)
    pub token_expiry: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_SECRET`: Symmetric signing secret (required)
    /// - `JWT_TOKEN_EXPIRY`: Token lifetime in seconds (default: 86400)
    pub fn from_env() -> Result<Self> {
        let secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable not set"))?;

        let token_expiry = env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);

        Ok(JwtConfig {
            secret,
            token_expiry,
        })
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Issued at time (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry: u64,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied clock in `validate`.
        validation.validate_exp = false;

        JwtService {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            token_expiry: config.token_expiry,
        }
    }

    /// Issue a session token for a user
    ///
    /// The token expires `token_expiry` seconds after `now`.
    pub fn issue(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: now.timestamp() + self.token_expiry as i64,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?;
        Ok(token)
    }

    /// Validate a token at the given instant and return its subject
    ///
    /// Rejects malformed tokens, bad signatures, tokens signed with any
    /// algorithm other than HS256, and tokens whose expiry has passed. All
    /// failures collapse to the same `Unauthorized` error.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, ApiError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| ApiError::Unauthorized(INVALID_TOKEN.to_string()))?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(ApiError::Unauthorized(INVALID_TOKEN.to_string()));
        }

        Ok(token_data.claims.sub)
    }

    /// Get the token lifetime in seconds
    pub fn token_expiry(&self) -> u64 {
        self.token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> JwtService {
        JwtService::new(&JwtConfig {
            secret: "test-secret-at-least-long-enough".to_string(),
            token_expiry: 3600,
        })
    }

    fn unauthorized_message(err: ApiError) -> String {
        match err {
            ApiError::Unauthorized(msg) => msg,
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn issued_token_validates_to_its_subject() {
        let jwt = service();
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let token = jwt.issue(user_id, now).expect("issue token");

        // Any instant strictly before expiry is fine.
        for offset in [0, 1, 1800, 3599] {
            let at = now + Duration::seconds(offset);
            assert_eq!(jwt.validate(&token, at).expect("validate"), user_id);
        }
    }

    #[test]
    fn token_is_rejected_at_and_after_expiry() {
        let jwt = service();
        let now = Utc::now();
        let token = jwt.issue(Uuid::new_v4(), now).expect("issue token");

        for offset in [3600, 3601, 100_000] {
            let at = now + Duration::seconds(offset);
            let err = jwt.validate(&token, at).expect_err("expired token");
            assert_eq!(unauthorized_message(err), INVALID_TOKEN);
        }
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let jwt = service();
        let now = Utc::now();
        let token = jwt.issue(Uuid::new_v4(), now).expect("issue token");

        // Swap the payload segment for one claiming a different subject.
        let other = jwt.issue(Uuid::new_v4(), now).expect("issue token");
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let forged = parts.join(".");

        let err = jwt.validate(&forged, now).expect_err("forged token");
        assert_eq!(unauthorized_message(err), INVALID_TOKEN);
    }

    #[test]
    fn foreign_algorithm_is_rejected() {
        let jwt = service();
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: now.timestamp() + 3600,
        };

        // Signed with the right secret but the wrong algorithm.
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret("test-secret-at-least-long-enough".as_bytes()),
        )
        .expect("encode");

        let err = jwt.validate(&token, now).expect_err("wrong algorithm");
        assert_eq!(unauthorized_message(err), INVALID_TOKEN);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let jwt = service();
        let other = JwtService::new(&JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            token_expiry: 3600,
        });
        let now = Utc::now();

        let token = other.issue(Uuid::new_v4(), now).expect("issue token");
        let err = jwt.validate(&token, now).expect_err("foreign signature");
        assert_eq!(unauthorized_message(err), INVALID_TOKEN);
    }

    #[test]
    fn malformed_token_is_rejected() {
        let jwt = service();
        let now = Utc::now();

        for garbage in ["", "not-a-token", "a.b", "a.b.c.d"] {
            let err = jwt.validate(garbage, now).expect_err("malformed token");
            assert_eq!(unauthorized_message(err), INVALID_TOKEN);
        }
    }
}
