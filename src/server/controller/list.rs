use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{ListDetailDto, SchoolListDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static LIST_TAG: &str = "list";

/// Get the school lists assigned to a commune ordered by name
#[utoipa::path(
    get,
    path = "/api/comunas/{comunaId}/lists",
    tag = LIST_TAG,
    params(
        ("comunaId" = i32, Path, description = "Commune ID")
    ),
    responses(
        (status = 200, description = "Lists assigned to the commune", body = Vec<SchoolListDto>),
        (status = 400, description = "Commune ID is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comuna_lists(
    State(state): State<AppState>,
    comuna_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(comuna_id) = comuna_id?;

    let lists = CatalogService::new(&state.db)
        .list_school_lists(comuna_id)
        .await?;

    Ok(Json(lists))
}

/// Get a school list with its products
#[utoipa::path(
    get,
    path = "/api/lists/{listId}",
    tag = LIST_TAG,
    params(
        ("listId" = i32, Path, description = "School list ID")
    ),
    responses(
        (status = 200, description = "List with one product entry per line", body = ListDetailDto),
        (status = 400, description = "List ID is not an integer", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_list(
    State(state): State<AppState>,
    list_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(list_id) = list_id?;

    let detail = CatalogService::new(&state.db).get_list_detail(list_id).await?;

    Ok(Json(detail))
}
