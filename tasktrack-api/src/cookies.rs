/// Auth cookie construction
///
/// The session token is delivered as an HTTP-only cookie named `token`.
/// Logout overwrites it with an empty, immediately-expiring cookie carrying
/// the exact same attribute set; browsers only replace a cookie when
/// path/sameSite/secure/httpOnly all match the original.
///
/// In production the cookie is `Secure` with `SameSite=None` so cross-site
/// frontends can use it; in development it is `SameSite=Lax` over plain HTTP.

use axum_extra::extract::cookie::{Cookie, SameSite};
use tasktrack_shared::auth::jwt::TOKEN_LIFETIME_HOURS;
use tasktrack_shared::auth::middleware::AUTH_COOKIE;
use time::Duration;

/// Builds the session cookie set on successful login
pub fn auth_cookie(token: String, production: bool) -> Cookie<'static> {
    base_cookie(token, production, Duration::hours(TOKEN_LIFETIME_HOURS))
}

/// Builds the clearing cookie set on logout
///
/// Empty value and zero max-age, identical attributes otherwise.
pub fn clear_auth_cookie(production: bool) -> Cookie<'static> {
    base_cookie(String::new(), production, Duration::ZERO)
}

fn base_cookie(value: String, production: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            // Cross-site frontends need the cookie on fetches with credentials
            SameSite::None
        } else {
            SameSite::Lax
        })
        .max_age(max_age)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie("tok123".to_string(), true);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "tok123");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::hours(12)));
    }

    #[test]
    fn test_dev_cookie_is_lax_and_not_secure() {
        let cookie = auth_cookie("tok123".to_string(), false);

        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_clear_cookie_matches_issuance_attributes() {
        let issued = auth_cookie("tok123".to_string(), true);
        let cleared = clear_auth_cookie(true);

        assert_eq!(cleared.name(), issued.name());
        assert_eq!(cleared.value(), "");
        assert_eq!(cleared.path(), issued.path());
        assert_eq!(cleared.http_only(), issued.http_only());
        assert_eq!(cleared.secure(), issued.secure());
        assert_eq!(cleared.same_site(), issued.same_site());
        assert_eq!(cleared.max_age(), Some(Duration::ZERO));
    }
}
