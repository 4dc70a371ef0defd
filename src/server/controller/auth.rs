use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        admin::AdminLoginDto,
        api::{ErrorDto, SuccessDto},
    },
    server::{
        controller::util::admin::admin_token_matches,
        error::{auth::AuthError, Error},
        model::{app::AppState, session::admin::SessionAdmin},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange the admin token for an admin session
///
/// Browser clients use the resulting session cookie instead of sending the bearer token with
/// every admin request.
///
/// # Responses
/// - 200 (Success): Session now holds the admin role
/// - 400 (Bad Request): Malformed body
/// - 401 (Unauthorized): Token does not match the configured admin token
/// - 500 (Internal Server Error): Session could not be updated
#[utoipa::path(
    post,
    path = "/api/admin/session",
    tag = AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Admin session established", body = SuccessDto),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 401, description = "Invalid admin token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<AdminLoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(login) = payload?;

    if !admin_token_matches(&state.admin_token, &login.token) {
        return Err(AuthError::InvalidAdminToken.into());
    }

    // New session id on privilege change, an id known before login stays anonymous
    session.cycle_id().await?;
    SessionAdmin::insert(&session).await?;

    tracing::info!("Admin session established");

    Ok(Json(SuccessDto { success: true }))
}

/// Drop the admin role from the current session
///
/// Succeeds whether or not the session held the admin role.
#[utoipa::path(
    delete,
    path = "/api/admin/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Admin session ended", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Only touch the session if it is actually an admin session, avoids creating an empty
    // session record for anonymous callers
    if SessionAdmin::get(&session).await? {
        SessionAdmin::remove(&session).await?;
    }

    Ok(Json(SuccessDto { success: true }))
}
