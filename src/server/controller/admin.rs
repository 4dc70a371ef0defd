//! Admin endpoints for curating school lists.
//!
//! Every route here sits behind [`crate::server::controller::util::admin::require_admin`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AddProductDto, AddedProductDto, AssignComunaDto, CreateListDto, CreatedListDto},
        api::{ErrorDto, SuccessDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static ADMIN_TAG: &str = "admin";

/// Create a school list
#[utoipa::path(
    post,
    path = "/api/admin/lists",
    tag = ADMIN_TAG,
    request_body = CreateListDto,
    responses(
        (status = 200, description = "List created", body = CreatedListDto),
        (status = 400, description = "Missing field or blank name", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    payload: Result<Json<CreateListDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    let created = CatalogService::new(&state.db)
        .create_school_list(input)
        .await?;

    Ok(Json(created))
}

/// Assign a school list to a commune
///
/// Assigning the same pair twice succeeds both times. The commune ID is not validated.
#[utoipa::path(
    post,
    path = "/api/admin/lists/{listId}/assign-comuna",
    tag = ADMIN_TAG,
    params(
        ("listId" = i32, Path, description = "School list ID")
    ),
    request_body = AssignComunaDto,
    responses(
        (status = 200, description = "Assignment stored", body = SuccessDto),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_comuna(
    State(state): State<AppState>,
    list_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AssignComunaDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(list_id) = list_id?;
    let Json(input) = payload?;

    CatalogService::new(&state.db)
        .assign_list_to_comuna(list_id, input.comuna_id)
        .await?;

    Ok(Json(SuccessDto { success: true }))
}

/// Add a product line to a school list
///
/// Unknown Shopify IDs get a placeholder product until the next product sync fills it in.
#[utoipa::path(
    post,
    path = "/api/admin/lists/{listId}/products",
    tag = ADMIN_TAG,
    params(
        ("listId" = i32, Path, description = "School list ID")
    ),
    request_body = AddProductDto,
    responses(
        (status = 200, description = "Line added", body = AddedProductDto),
        (status = 400, description = "Blank Shopify ID or non-positive quantity", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_product(
    State(state): State<AppState>,
    list_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AddProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(list_id) = list_id?;
    let Json(input) = payload?;

    let product_id = CatalogService::new(&state.db)
        .add_product_to_list(list_id, &input.shopify_product_id, input.quantity)
        .await?;

    Ok(Json(AddedProductDto {
        success: true,
        product_id,
    }))
}
