use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::admin::SessionAdmin},
};

/// Middleware guarding admin routes.
///
/// A bearer token, when present, must equal the configured admin token; a mismatch is
/// rejected even if the session holds the admin role. Without a bearer token the session
/// must have been marked admin by the login route.
///
/// # Returns
/// - `Ok(Response)` - Response of the wrapped route
/// - `Err(Error::AuthError(AuthError::InvalidAdminToken))` - Bearer token does not match
/// - `Err(Error::AuthError(AuthError::MissingAdminCredentials))` - No token and no admin session
/// - `Err(Error::SessionError)` - Session could not be read
pub async fn require_admin(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    if let Some(token) = bearer_token(request.headers()) {
        if !admin_token_matches(&state.admin_token, token) {
            return Err(AuthError::InvalidAdminToken.into());
        }

        return Ok(next.run(request).await);
    }

    if !SessionAdmin::get(&session).await? {
        return Err(AuthError::MissingAdminCredentials.into());
    }

    Ok(next.run(request).await)
}

/// Compares a presented token against the configured admin token in constant time.
pub fn admin_token_matches(expected: &str, candidate: &str) -> bool {
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}

/// Token of an `Authorization: Bearer <token>` header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}
