//! Error types for the catalog server.
//!
//! Domain errors (configuration, admin authorization, catalog) each implement `IntoResponse`
//! with their own status mapping. Library errors are aggregated into the top-level [`Error`]
//! via `thiserror`'s `#[from]` so `?` works across layers, and fall back to a logged 500
//! response whose body never carries the underlying message.

pub mod auth;
pub mod catalog;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, catalog::CatalogError, config::ConfigError},
};

/// Main error type for the catalog server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Admin authorization errors (missing or invalid credentials)
/// - Catalog errors (missing list, invalid input)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Catalog error (list not found, validation failure).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Internal error indicating a broken invariant in stored data or in this code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Connection pool error raised while connecting at startup.
    #[error(transparent)]
    SqlxError(#[from] sea_orm::sqlx::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Malformed or incomplete JSON bodies are reported as validation failures so that every
/// error response keeps the `{error}` shape.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::CatalogError(CatalogError::InvalidInput(rejection.body_text()))
    }
}

/// Same for path parameters that fail to parse, e.g. `/api/lists/abc`.
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::CatalogError(CatalogError::InvalidInput(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid input
/// - 401 Unauthorized - Missing or invalid admin credentials
/// - 404 Not Found - School list not found
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
