/// Authentication gate for protected routes
///
/// The single enforcement point for identity. Every protected route passes
/// through here; downstream handlers trust the bound `AuthContext`
/// unconditionally and never re-verify the token.
///
/// Credential lookup order and failure classification:
///
/// 1. Cookie `token` first, bearer `Authorization` header as fallback.
/// 2. Missing token → 401 "Authentication required".
/// 3. Expired token → 401 "Token expired".
/// 4. Bad signature or malformed token → 403.

use crate::{app::AppState, error::ApiError};
use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use tasktrack_shared::auth::middleware::authenticate;

/// Middleware layer that verifies the session token and binds the identity
///
/// On success, inserts `AuthContext` into request extensions for handlers to
/// extract with `Extension<AuthContext>`.
pub async fn auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_context = authenticate(req.headers(), state.jwt_secret())?;

    tracing::debug!(user_id = %auth_context.user_id, "Request authenticated");

    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
