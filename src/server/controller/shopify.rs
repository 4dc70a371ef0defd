use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        shopify::{CartUrlDto, CartUrlRequestDto, SyncProductsDto, SyncResultDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::shopify::{build_cart_url, ShopifyService},
    },
};

pub static SHOPIFY_TAG: &str = "shopify";

/// Upsert products pushed from the Shopify catalog
///
/// Admin only. The batch is validated up front; an invalid item rejects the whole batch
/// before anything is written.
#[utoipa::path(
    post,
    path = "/api/shopify/sync-products",
    tag = SHOPIFY_TAG,
    request_body = SyncProductsDto,
    responses(
        (status = 200, description = "Products synced", body = SyncResultDto),
        (status = 400, description = "Malformed batch, blank ID or invalid price", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_products(
    State(state): State<AppState>,
    payload: Result<Json<SyncProductsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    let count = ShopifyService::new(&state.db)
        .sync_products(input.products)
        .await?;

    tracing::info!("Synced {} products from Shopify", count);

    Ok(Json(SyncResultDto {
        success: true,
        count,
    }))
}

/// Build the storefront cart URL for the selected items
#[utoipa::path(
    post,
    path = "/api/shopify/cart-url",
    tag = SHOPIFY_TAG,
    request_body = CartUrlRequestDto,
    responses(
        (status = 200, description = "Cart permalink on the storefront", body = CartUrlDto),
        (status = 400, description = "Malformed request", body = ErrorDto)
    ),
)]
pub async fn get_cart_url(
    State(state): State<AppState>,
    payload: Result<Json<CartUrlRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    Ok(Json(CartUrlDto {
        cart_url: build_cart_url(&state.shopify_store_url, &input.items),
    }))
}
