/// Authentication context and token extraction
///
/// Protected routes are gated by a single middleware layer in the API crate.
/// This module holds the pieces it is built from: the credential lookup
/// order (cookie first, then bearer header), the verified identity that gets
/// bound to the request, and the error classification the gate maps to
/// status codes.
///
/// # Request Extensions
///
/// After successful authentication the middleware inserts an `AuthContext`
/// into request extensions. Handlers extract it with Axum's `Extension`
/// extractor and trust it unconditionally; ownership checks downstream never
/// re-verify the token.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use tasktrack_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, user {}!", auth.user_id)
/// }
/// ```

use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::{verify_token, Claims, TokenError};

/// Name of the server-issued auth cookie
pub const AUTH_COOKIE: &str = "token";

/// Verified identity bound to a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: Uuid,

    /// Email carried by the token
    pub email: String,

    /// Display name carried by the token
    pub name: Option<String>,
}

impl AuthContext {
    /// Creates auth context from verified claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            name: claims.name,
        }
    }
}

/// Error type for the authentication gate
#[derive(Debug)]
pub enum AuthError {
    /// No token in cookie or Authorization header
    MissingToken,

    /// Token expiry has elapsed
    Expired,

    /// Bad signature or malformed token
    InvalidToken(String),
}

/// Finds the session token on a request
///
/// The cookie is checked first; a bearer `Authorization` header is the
/// fallback for cross-origin clients that store the token themselves.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(AUTH_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

/// Verifies a request's token and produces the identity to bind
///
/// # Errors
///
/// - `AuthError::MissingToken` if neither cookie nor header carries a token
/// - `AuthError::Expired` for a token past its embedded expiry
/// - `AuthError::InvalidToken` for a bad signature or malformed token
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let token = extract_token(headers).ok_or(AuthError::MissingToken)?;

    let claims = verify_token(&token, secret).map_err(|e| match e {
        TokenError::Expired => AuthError::Expired,
        other => AuthError::InvalidToken(other.to_string()),
    })?;

    Ok(AuthContext::from_claims(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{issue_token, Claims};
    use axum::http::HeaderValue;
    use chrono::Duration;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    fn headers_with_cookie(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("token={}", token)).unwrap(),
        );
        headers
    }

    fn headers_with_bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let headers = headers_with_cookie("abc123");
        assert_eq!(extract_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_extract_token_from_bearer_header() {
        let headers = headers_with_bearer("abc123");
        assert_eq!(extract_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cookie_takes_precedence_over_header() {
        let mut headers = headers_with_cookie("from-cookie");
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(extract_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_empty_cookie_falls_back_to_header() {
        let mut headers = headers_with_cookie("");
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(extract_token(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_extract_token_missing() {
        let headers = HeaderMap::new();
        assert!(extract_token(&headers).is_none());
    }

    #[test]
    fn test_authenticate_valid_token() {
        let user_id = uuid::Uuid::new_v4();
        let claims = Claims::new(user_id, "user@example.com".into(), Some("User".into()));
        let token = issue_token(&claims, SECRET).unwrap();

        let ctx = authenticate(&headers_with_cookie(&token), SECRET).unwrap();
        assert_eq!(ctx.user_id, user_id);
        assert_eq!(ctx.email, "user@example.com");
    }

    #[test]
    fn test_authenticate_missing_token() {
        let result = authenticate(&HeaderMap::new(), SECRET);
        assert!(matches!(result.unwrap_err(), AuthError::MissingToken));
    }

    #[test]
    fn test_authenticate_expired_token() {
        let claims = Claims::with_expiration(
            uuid::Uuid::new_v4(),
            "a@b.com".into(),
            None,
            // Well past the verifier's clock-skew leeway
            Duration::seconds(-3600),
        );
        let token = issue_token(&claims, SECRET).unwrap();

        let result = authenticate(&headers_with_cookie(&token), SECRET);
        assert!(matches!(result.unwrap_err(), AuthError::Expired));
    }

    #[test]
    fn test_authenticate_bad_signature() {
        let claims = Claims::new(uuid::Uuid::new_v4(), "a@b.com".into(), None);
        let token = issue_token(&claims, "other-secret-at-least-32-bytes-long").unwrap();

        let result = authenticate(&headers_with_cookie(&token), SECRET);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }
}
