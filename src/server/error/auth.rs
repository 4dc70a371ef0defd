use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Admin route requested without a bearer token or admin session")]
    MissingAdminCredentials,
    #[error("Admin credentials did not match the configured admin token")]
    InvalidAdminToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingAdminCredentials => tracing::debug!("{}", self),
            Self::InvalidAdminToken => tracing::warn!("{}", self),
        }

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
