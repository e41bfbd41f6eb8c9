/// Error handling for the API server
///
/// A unified error type that maps to HTTP responses. All handlers return
/// `Result<T, ApiError>` which converts to the appropriate status code.
///
/// The taxonomy is part of the HTTP contract:
///
/// | Variant        | Status |
/// |----------------|--------|
/// | `BadRequest`   | 400    |
/// | `Unauthorized` | 401    |
/// | `Forbidden`    | 403    |
/// | `NotFound`     | 404    |
/// | `Conflict`     | 409    |
/// | `Internal`     | 500    |
///
/// `NotFound` deliberately never distinguishes "does not exist" from
/// "belongs to another user"; internal error details are logged but
/// suppressed from responses.

use axum::{
    extract::rejection::JsonRejection,
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tasktrack_shared::auth::{
    jwt::TokenError, middleware::AuthError, password::PasswordError,
};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON request body extractor
///
/// Axum's bare `Json` answers deserialization failures with 422; the contract
/// here is 400 for any bad body, including an absent required field, so every
/// handler that takes a body goes through this wrapper instead.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - malformed or missing input
    BadRequest(String),

    /// Unauthorized (401) - no or expired credential
    Unauthorized(String),

    /// Forbidden (403) - credential present but cryptographically invalid
    Forbidden(String),

    /// Not found (404) - missing or not owned by the caller
    NotFound(String),

    /// Conflict (409) - duplicate unique key
    Conflict(String),

    /// Internal server error (500) - store or unexpected failure
    Internal(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "unauthorized")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Unique constraint on users.email surfaces as 409
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::Conflict("User already exists".to_string());
                    }
                    return ApiError::Conflict(format!("Constraint violation: {}", constraint));
                }

                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert auth gate errors to API errors
///
/// Classification matters here: a missing or expired credential is 401, a
/// credential that fails signature verification is 403.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => {
                ApiError::Unauthorized("Authentication required".to_string())
            }
            AuthError::Expired => ApiError::Unauthorized("Token expired".to_string()),
            AuthError::InvalidToken(_) => {
                ApiError::Forbidden("Invalid token".to_string())
            }
        }
    }
}

/// Convert token service errors to API errors
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::Unauthorized("Token expired".to_string()),
            TokenError::Invalid(_) => ApiError::Forbidden("Invalid token".to_string()),
            TokenError::CreateError(msg) => {
                ApiError::Internal(format!("Token creation failed: {}", msg))
            }
        }
    }
}

/// Convert password errors to API errors
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert body extraction failures to API errors
///
/// Covers missing bodies, syntactically broken JSON, and bodies that fail to
/// deserialize (absent required fields, wrong types, unknown enum values).
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convert request validation failures to API errors
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        ApiError::BadRequest(message)
    }
}
