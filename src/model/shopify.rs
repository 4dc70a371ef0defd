use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A product identifier issued by Shopify.
///
/// Accepted as either a JSON string or an integer and always serialized as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "RawShopifyId")]
pub struct ShopifyId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawShopifyId {
    Text(String),
    Number(u64),
}

impl From<RawShopifyId> for ShopifyId {
    fn from(raw: RawShopifyId) -> Self {
        match raw {
            RawShopifyId::Text(id) => ShopifyId(id),
            RawShopifyId::Number(id) => ShopifyId(id.to_string()),
        }
    }
}

impl From<&str> for ShopifyId {
    fn from(id: &str) -> Self {
        ShopifyId(id.to_string())
    }
}

impl ShopifyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopifyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncProductsDto {
    pub products: Vec<ShopifyProductDto>,
}

/// Product data as exported from the Shopify catalog
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShopifyProductDto {
    pub id: ShopifyId,
    pub title: String,
    /// Shopify exports prices as decimal strings, plain numbers are accepted too
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub stock: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(price) => Ok(price),
        RawPrice::Text(price) => price
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid price: {:?}", price))),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResultDto {
    pub success: bool,
    pub count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CartUrlRequestDto {
    pub items: Vec<CartItemDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub shopify_id: ShopifyId,
    pub quantity: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartUrlDto {
    pub cart_url: String,
}
