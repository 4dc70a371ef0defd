use sea_orm::EntityTrait;

use super::*;
use crate::server::service::catalog::CatalogService;

fn product(id: &str, title: &str, price: f64, stock: i32) -> ShopifyProductDto {
    ShopifyProductDto {
        id: ShopifyId::from(id),
        title: title.to_string(),
        price,
        stock,
    }
}

/// Expect new products inserted and the batch size returned
#[tokio::test]
async fn inserts_products() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;

    let shopify_service = ShopifyService::new(&test.db);
    let count = shopify_service
        .sync_products(vec![
            product("111", "Cuaderno universitario", 1990.0, 25),
            product("222", "Lápices de colores", 3490.0, 10),
        ])
        .await
        .unwrap();

    assert_eq!(count, 2);
    let synced = test.catalog().find_product("222").await?.unwrap();
    assert_eq!(synced.name, "Lápices de colores");
    assert_eq!(synced.price, 3490.0);
    assert_eq!(synced.stock, 10);

    Ok(())
}

/// Expect a placeholder to be overwritten in place, keeping its internal ID
#[tokio::test]
async fn overwrites_placeholder() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_school_list(1)
        .build()
        .await?;
    let placeholder_id = CatalogService::new(&test.db)
        .add_product_to_list(1, &ShopifyId::from("111"), 1)
        .await
        .unwrap();

    let shopify_service = ShopifyService::new(&test.db);
    shopify_service
        .sync_products(vec![product("111", "Cuaderno universitario", 1990.0, 25)])
        .await
        .unwrap();

    let synced = test.catalog().find_product("111").await?.unwrap();
    assert_eq!(synced.id, placeholder_id);
    assert_eq!(synced.name, "Cuaderno universitario");
    assert_eq!(synced.stock, 25);

    Ok(())
}

/// Expect syncing the same batch twice to leave one row per product
#[tokio::test]
async fn repeated_sync_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let shopify_service = ShopifyService::new(&test.db);
    let batch = vec![product("111", "Goma de borrar", 490.0, 100)];
    shopify_service.sync_products(batch.clone()).await.unwrap();
    shopify_service.sync_products(batch).await.unwrap();

    let products = entity::prelude::Product::find().all(&test.db).await?;
    assert_eq!(products.len(), 1);

    Ok(())
}

/// Expect an empty batch to report zero
#[tokio::test]
async fn empty_batch_returns_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let shopify_service = ShopifyService::new(&test.db);
    let count = shopify_service.sync_products(Vec::new()).await.unwrap();

    assert_eq!(count, 0);

    Ok(())
}

/// Expect a batch containing a blank ID to be rejected before anything is written
#[tokio::test]
async fn rejects_blank_id_without_writing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let shopify_service = ShopifyService::new(&test.db);
    let result = shopify_service
        .sync_products(vec![
            product("111", "Cuaderno", 1990.0, 25),
            product("", "Sin ID", 100.0, 1),
        ])
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::InvalidInput(_)))
    ));
    let products = entity::prelude::Product::find().all(&test.db).await?;
    assert!(products.is_empty());

    Ok(())
}

/// Expect negative and non-finite prices to be rejected
#[tokio::test]
async fn rejects_invalid_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let shopify_service = ShopifyService::new(&test.db);

    for price in [-1.0, f64::NAN, f64::INFINITY] {
        let result = shopify_service
            .sync_products(vec![product("111", "Regla", price, 1)])
            .await;

        assert!(matches!(
            result,
            Err(Error::CatalogError(CatalogError::InvalidInput(_)))
        ));
    }

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let shopify_service = ShopifyService::new(&test.db);
    let result = shopify_service
        .sync_products(vec![product("111", "Regla", 590.0, 1)])
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
