/// User endpoints: registration, login, logout, current user
///
/// # Endpoints
///
/// - `POST /user/register` - register a new account
/// - `POST /user/login` - authenticate and receive a session token
/// - `POST /user/logout` - clear the session cookie
/// - `POST /user/get` - fetch the authenticated user's public fields
///
/// Login delivers the token twice on purpose: as an HTTP-only cookie for
/// same-site clients, and in the response body for cross-origin clients that
/// attach it as a bearer header themselves. Login failures use one generic
/// message whether the email is unknown or the password is wrong.

use crate::{
    app::AppState,
    cookies::{auth_cookie, clear_auth_cookie},
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tasktrack_shared::{
    auth::{jwt, middleware::AuthContext, password},
    models::user::{CreateUser, User},
};
use uuid::Uuid;
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Password (stored only as a salted hash)
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register response
///
/// No sensitive data is echoed back.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(
        length(min = 1, message = "Email and password are required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Public user fields returned by login
#[derive(Debug, Serialize)]
pub struct PublicUser {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Outcome marker
    pub status: String,

    /// Confirmation message
    pub message: String,

    /// Public user fields
    pub user: PublicUser,

    /// Raw session token for client-side storage
    pub token: String,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// Outcome marker
    pub status: String,

    /// Confirmation message
    pub message: String,
}

/// Current-user response
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Register a new user
///
/// # Errors
///
/// - `400 Bad Request`: missing fields
/// - `409 Conflict`: email already registered
/// - `500 Internal Server Error`: store error
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    req.validate()?;

    // Lookup first for a clean 409; the unique constraint still backs this
    // against races
    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Login and receive a session token
///
/// Sets the auth cookie and returns the raw token plus public user fields.
///
/// # Errors
///
/// - `400 Bad Request`: missing fields or malformed email
/// - `401 Unauthorized`: invalid credentials (same message for unknown
///   email and wrong password)
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = jwt::Claims::new(user.id, user.email.clone(), Some(user.name.clone()));
    let token = jwt::issue_token(&claims, state.jwt_secret())?;

    let jar = jar.add(auth_cookie(token.clone(), state.config.api.production));

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        jar,
        Json(LoginResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            user: PublicUser {
                id: user.id,
                email: user.email,
                name: user.name,
            },
            token,
        }),
    ))
}

/// Logout by clearing the auth cookie
///
/// Always succeeds. Tokens already mirrored into client-side storage remain
/// cryptographically valid until their embedded expiry elapses; with
/// stateless verification there is no server-side revocation.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<LogoutResponse>)> {
    let jar = jar.add(clear_auth_cookie(state.config.api.production));

    Ok((
        jar,
        Json(LogoutResponse {
            status: "success".to_string(),
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Return the authenticated user's public fields
///
/// Identity comes from the gate; the record itself is fetched fresh so the
/// response reflects the store, not the token snapshot.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        name: user.name,
        email: user.email,
    }))
}
