use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("School list ID {0} not found")]
    ListNotFound(i32),
    #[error("{0}")]
    InvalidInput(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::ListNotFound(list_id) => {
                tracing::debug!(list_id = %list_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "List not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidInput(reason) => {
                tracing::debug!("Rejected invalid input: {}", reason);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
