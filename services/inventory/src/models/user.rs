//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
///
/// The password hash and tombstone never appear in any outward-facing
/// representation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// What the user store persists: credentials already hashed by the business
/// layer.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Registration request payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: session token plus the user's public profile
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_never_carries_the_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            password_hash: "$argon2id$something".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };

        let value = serde_json::to_value(&user).expect("serialize user");
        let object = value.as_object().expect("object");

        assert!(object.contains_key("username"));
        assert!(object.contains_key("email"));
        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("deleted_at"));
    }
}
