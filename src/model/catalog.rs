use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::shopify::ShopifyId;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComunaDto {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolListDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A school list with one entry per product line
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDetailDto {
    #[serde(flatten)]
    pub list: SchoolListDto,
    pub products: Vec<ListProductDto>,
}

/// A catalog product together with the quantity requested by one list line
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProductDto {
    pub id: i32,
    pub shopify_id: ShopifyId,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub quantity: i32,
}
