//! Password hashing capability
//!
//! One-way, salted hashing behind a small trait so the business layer never
//! depends on the concrete scheme.

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier, password_hash::SaltString};

/// Capability interface for password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Verify a plaintext password against a stored hash
    fn verify(&self, hash: &str, plaintext: &str) -> bool;
}

/// Argon2-backed hasher with default parameters
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        Ok(hash)
    }

    fn verify(&self, hash: &str, plaintext: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_never_equals_plaintext() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash("securepassword123").expect("hash");

        assert_ne!(hash, "securepassword123");
        assert!(hasher.verify(&hash, "securepassword123"));
        assert!(!hasher.verify(&hash, "securepassword124"));
    }

    #[test]
    fn hashing_is_salted() {
        let hasher = Argon2Hasher;
        let a = hasher.hash("same password").expect("hash");
        let b = hasher.hash("same password").expect("hash");

        assert_ne!(a, b);
    }

    #[test]
    fn garbage_hash_never_verifies() {
        let hasher = Argon2Hasher;
        assert!(!hasher.verify("not a phc string", "anything"));
    }
}
