//! Shopify integration.
//!
//! Product sync writes catalog data pushed from the storefront; cart URLs send shoppers to the
//! storefront with their selected items.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::shopify::{CartItemDto, ShopifyProductDto},
    server::{
        data::product::ProductRepository,
        error::{catalog::CatalogError, Error},
    },
};

pub struct ShopifyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopifyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts every product by Shopify ID and returns how many were received.
    ///
    /// The whole batch is validated before any write. Products are then written one at a time
    /// in input order and the first database error aborts the sync; products written before it
    /// stay written.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of products in the batch
    /// - `Err(Error::CatalogError(CatalogError::InvalidInput))` - Blank ID or invalid price
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn sync_products(&self, products: Vec<ShopifyProductDto>) -> Result<usize, Error> {
        for product in &products {
            validate_product(product)?;
        }

        let count = products.len();
        let product_repo = ProductRepository::new(self.db);

        for product in products {
            product_repo
                .upsert(
                    product.id.as_str().trim().to_string(),
                    product.title,
                    product.price,
                    product.stock,
                )
                .await?;
        }

        Ok(count)
    }
}

fn validate_product(product: &ShopifyProductDto) -> Result<(), CatalogError> {
    if product.id.as_str().trim().is_empty() {
        return Err(CatalogError::InvalidInput(
            "Product ID must not be empty".to_string(),
        ));
    }

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::InvalidInput(format!(
            "Product {} has an invalid price",
            product.id
        )));
    }

    Ok(())
}

/// Builds the storefront cart permalink for `items`.
///
/// Produces `https://{store_url}/cart/{id}:{quantity},...` with items in input order. Nothing
/// is escaped or filtered, a zero or negative quantity ends up in the URL as is.
pub fn build_cart_url(store_url: &str, items: &[CartItemDto]) -> String {
    let cart_items = items
        .iter()
        .map(|item| format!("{}:{}", item.shopify_id, item.quantity))
        .collect::<Vec<_>>()
        .join(",");

    format!("https://{}/cart/{}", store_url, cart_items)
}
