use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::shopify::ShopifyId;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListDto {
    pub name: String,
    pub description: String,
    pub created_by: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedListDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignComunaDto {
    pub comuna_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProductDto {
    pub shopify_product_id: ShopifyId,
    pub quantity: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddedProductDto {
    pub success: bool,
    pub product_id: i32,
}

/// Credentials exchanged for an admin session
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginDto {
    pub token: String,
}
