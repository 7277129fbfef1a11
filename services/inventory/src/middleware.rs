//! Authentication middleware for JWT token validation

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::ApiError,
    jwt::INVALID_TOKEN,
    state::AppState,
};

/// Authenticated caller, inserted into request extensions for handlers
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Authentication middleware
///
/// Extracts the bearer token from the `Authorization` header and validates
/// it against the shared JWT service. Missing or malformed headers get the
/// same response as invalid tokens.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized(INVALID_TOKEN.to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized(INVALID_TOKEN.to_string()))?;

    let user_id = state.jwt_service.validate(token, Utc::now())?;

    req.extensions_mut().insert(AuthUser { id: user_id });

    Ok(next.run(req).await)
}
