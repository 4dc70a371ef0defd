//! HTTP routing and OpenAPI documentation configuration.
//!
//! Public catalog routes and admin routes are collected into separate utoipa routers so the
//! admin middleware can be layered onto the admin half only; their OpenAPI documents are then
//! merged and served through Swagger UI at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::admin::require_admin},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/health` - Liveness check
/// - `GET /api/regions` - All regions
/// - `GET /api/regions/{regionId}/comunas` - Communes of a region
/// - `GET /api/comunas/{comunaId}/lists` - Lists assigned to a commune
/// - `GET /api/lists/{listId}` - List with products
/// - `POST /api/shopify/cart-url` - Storefront cart URL
/// - `POST /api/admin/session` - Exchange the admin token for an admin session
/// - `DELETE /api/admin/session` - End the admin session
///
/// Admin only, guarded by [`require_admin`]:
/// - `POST /api/admin/lists` - Create a list
/// - `POST /api/admin/lists/{listId}/assign-comuna` - Assign a list to a commune
/// - `POST /api/admin/lists/{listId}/products` - Add a product line to a list
/// - `POST /api/shopify/sync-products` - Upsert products from Shopify
///
/// The returned router still needs a session layer, see
/// [`crate::server::startup::session_layer`].
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Utiles", description = "School-supply list catalog API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::geography::GEOGRAPHY_TAG, description = "Regions and communes"),
        (name = controller::list::LIST_TAG, description = "School lists"),
        (name = controller::shopify::SHOPIFY_TAG, description = "Shopify storefront integration"),
        (name = controller::auth::AUTH_TAG, description = "Admin session"),
        (name = controller::admin::ADMIN_TAG, description = "List administration"),
    ))]
    struct ApiDoc;

    let (public_routes, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::get_health))
        .routes(routes!(controller::geography::get_regions))
        .routes(routes!(controller::geography::get_region_comunas))
        .routes(routes!(controller::list::get_comuna_lists))
        .routes(routes!(controller::list::get_list))
        .routes(routes!(controller::shopify::get_cart_url))
        .routes(routes!(controller::auth::login, controller::auth::logout))
        .split_for_parts();

    let (admin_routes, admin_api) = OpenApiRouter::new()
        .routes(routes!(controller::admin::create_list))
        .routes(routes!(controller::admin::assign_comuna))
        .routes(routes!(controller::admin::add_product))
        .routes(routes!(controller::shopify::sync_products))
        .split_for_parts();

    let admin_routes =
        admin_routes.route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    api.merge(admin_api);

    public_routes
        .merge(admin_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
}
