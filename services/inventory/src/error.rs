//! Custom error types for the inventory service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the inventory service
///
/// Every variant except `Database` and `Internal` is an expected business
/// outcome and is reported to the caller with its message intact.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Uniqueness violation (username, email, SKU)
    #[error("{0}")]
    Conflict(String),

    /// Referenced entity is absent
    #[error("{0}")]
    NotFound(String),

    /// Bad credentials or a bad/expired token
    #[error("{0}")]
    Unauthorized(String),

    /// Input rejected by a business-rule-level constraint
    #[error("{0}")]
    Invalid(String),

    /// Database error
    #[error(transparent)]
    Database(#[from] common::error::DatabaseError),

    /// Any other store or wiring failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for results in the business and boundary layers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_keep_their_message() {
        let err = ApiError::Conflict("username already exists".to_string());
        assert_eq!(err.to_string(), "username already exists");

        let err = ApiError::NotFound("item not found".to_string());
        assert_eq!(err.to_string(), "item not found");
    }

    #[test]
    fn status_codes_match_taxonomy() {
        let cases = [
            (
                ApiError::Conflict("x".into()),
                StatusCode::CONFLICT,
            ),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Unauthorized("x".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (ApiError::Invalid("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
