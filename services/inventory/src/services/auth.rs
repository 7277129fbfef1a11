//! Authentication business rules

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::jwt::JwtService;
use crate::models::{LoginRequest, LoginResponse, NewUserRecord, RegisterRequest, User};
use crate::password::PasswordHasher;
use crate::repositories::UserStore;

/// Single message for both unknown-username and wrong-password failures, so
/// the API never reveals whether a username exists.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    jwt: JwtService,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>, jwt: JwtService) -> Self {
        Self { users, hasher, jwt }
    }

    /// Register a new user
    ///
    /// Both uniqueness checks run before the password is hashed and before
    /// anything is persisted. The store's unique indexes back the checks up
    /// under concurrent registration.
    pub async fn register(&self, req: RegisterRequest) -> ApiResult<User> {
        info!("Registration attempt for username: {}", req.username);

        if self.users.find_by_username(&req.username).await?.is_some() {
            return Err(ApiError::Conflict("username already exists".to_string()));
        }

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict("email already exists".to_string()));
        }

        let password_hash = self.hasher.hash(&req.password)?;

        let user = self
            .users
            .create(&NewUserRecord {
                username: req.username,
                email: req.email,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Authenticate a user and issue a session token
    pub async fn login(&self, req: LoginRequest) -> ApiResult<LoginResponse> {
        info!("Login attempt for username: {}", req.username);

        let user = self
            .users
            .find_by_username(&req.username)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !self.hasher.verify(&user.password_hash, &req.password) {
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.jwt.issue(user.id, Utc::now())?;

        Ok(LoginResponse {
            token,
            expires_in: self.jwt.token_expiry(),
            user,
        })
    }
}
