/// Session token issuance and verification
///
/// Session tokens are stateless JWTs signed with HS256. Each token binds a
/// user's identity (id, email, display name) with a fixed 12-hour expiry.
/// The server never stores live tokens; verification is purely cryptographic,
/// so there is no early-revocation path (logout only clears the client cookie).
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC-SHA256)
/// - **Expiration**: fixed 12-hour window from issuance
/// - **Validation**: signature, expiration, and issuer checks
/// - **Secret Management**: secret should be at least 32 bytes (256 bits)
///
/// # Example
///
/// ```
/// use tasktrack_shared::auth::jwt::{issue_token, verify_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
/// let claims = Claims::new(user_id, "user@example.com".into(), Some("User".into()));
/// let token = issue_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let verified = verify_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(verified.sub, user_id);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer embedded in every token
const ISSUER: &str = "tasktrack";

/// Fixed session lifetime
pub const TOKEN_LIFETIME_HOURS: i64 = 12;

/// Error type for token operations
///
/// Verification failures are classified so the request gate can map
/// `Expired` and `Invalid` to distinct responses.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Failed to sign the token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token has passed its embedded expiry
    #[error("Token has expired")]
    Expired,

    /// Bad signature, malformed token, or wrong issuer
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Claims carried by a session token
///
/// The identity triple is self-contained so protected handlers never need a
/// user lookup just to know who is calling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID
    pub sub: Uuid,

    /// Email address at time of issuance
    pub email: String,

    /// Optional display name
    pub name: Option<String>,

    /// Issuer - always "tasktrack"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims with the fixed 12-hour expiry
    pub fn new(user_id: Uuid, email: String, name: Option<String>) -> Self {
        Self::with_expiration(user_id, email, name, Duration::hours(TOKEN_LIFETIME_HOURS))
    }

    /// Creates claims with a custom expiry window
    ///
    /// Negative durations produce an already-expired token, which is how the
    /// expiry classification is exercised in tests.
    pub fn with_expiration(
        user_id: Uuid,
        email: String,
        name: Option<String>,
        expires_in: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            email,
            name,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a token string
///
/// # Errors
///
/// Returns `TokenError::CreateError` if encoding fails.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| TokenError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Verifies a token and extracts its claims
///
/// Checks the signature, the embedded expiry, and the issuer.
///
/// # Errors
///
/// - `TokenError::Expired` if the expiry has elapsed
/// - `TokenError::Invalid` for a bad signature, malformed token, or wrong issuer
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "a@b.com".into(), Some("A".into()));

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.iss, "tasktrack");
        assert!(!claims.is_expired());
        // 12-hour window
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_HOURS * 3600);
    }

    #[test]
    fn test_issue_and_verify_token() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "user@example.com".into(), Some("User".into()));
        let token = issue_token(&claims, SECRET).expect("Should create token");

        let verified = verify_token(&token, SECRET).expect("Should verify token");
        assert_eq!(verified.sub, user_id);
        assert_eq!(verified.email, "user@example.com");
        assert_eq!(verified.name.as_deref(), Some("User"));
        assert_eq!(verified.iss, "tasktrack");
    }

    #[test]
    fn test_verify_with_wrong_secret_is_invalid() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com".into(), None);
        let token = issue_token(&claims, "secret-one-at-least-32-bytes-long!!").unwrap();

        let result = verify_token(&token, "wrong-secret-at-least-32-bytes-long");
        assert!(matches!(result.unwrap_err(), TokenError::Invalid(_)));
    }

    #[test]
    fn test_verify_expired_token_is_classified_expired() {
        let claims = Claims::with_expiration(
            Uuid::new_v4(),
            "a@b.com".into(),
            None,
            Duration::seconds(-3600), // issued with a past expiry
        );

        assert!(claims.is_expired());

        let token = issue_token(&claims, SECRET).expect("Should create token");
        let result = verify_token(&token, SECRET);

        assert!(matches!(result.unwrap_err(), TokenError::Expired));
    }

    #[test]
    fn test_tampered_token_is_invalid_not_expired() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com".into(), None);
        let token = issue_token(&claims, SECRET).unwrap();

        // Replace the signature segment
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[2] = "AAAAAAAAAAAAAAAAAAAAAA";
        let tampered = parts.join(".");

        let result = verify_token(&tampered, SECRET);
        assert!(matches!(result.unwrap_err(), TokenError::Invalid(_)));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let result = verify_token("not-a-jwt", SECRET);
        assert!(matches!(result.unwrap_err(), TokenError::Invalid(_)));
    }
}
