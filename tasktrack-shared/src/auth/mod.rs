/// Authentication utilities
///
/// This module provides the secure primitives behind the session lifecycle:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: stateless session token issuance and verification
/// - [`middleware`]: auth context and credential extraction for the request gate
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Session Tokens**: HS256 signing with a fixed 12-hour expiry
/// - **Constant-time Comparison**: all verification uses constant-time operations
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::auth::password::{hash_password, verify_password};
/// use tasktrack_shared::auth::jwt::{issue_token, verify_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Password authentication
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// // Session token issuance
/// let claims = Claims::new(Uuid::new_v4(), "user@example.com".into(), None);
/// let token = issue_token(&claims, "secret-key-at-least-32-bytes-long!")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
