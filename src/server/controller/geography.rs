use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{ComunaDto, RegionDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static GEOGRAPHY_TAG: &str = "geography";

/// Get all regions ordered by name
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = GEOGRAPHY_TAG,
    responses(
        (status = 200, description = "Regions ordered by name", body = Vec<RegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_regions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let regions = CatalogService::new(&state.db).list_regions().await?;

    Ok(Json(regions))
}

/// Get the communes of a region ordered by name
///
/// Unknown regions yield an empty array rather than an error.
#[utoipa::path(
    get,
    path = "/api/regions/{regionId}/comunas",
    tag = GEOGRAPHY_TAG,
    params(
        ("regionId" = i32, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Communes of the region", body = Vec<ComunaDto>),
        (status = 400, description = "Region ID is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region_comunas(
    State(state): State<AppState>,
    region_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(region_id) = region_id?;

    let comunas = CatalogService::new(&state.db)
        .list_comunas(region_id)
        .await?;

    Ok(Json(comunas))
}
