use super::*;

/// Expect the cart URL built from the configured store in item order
#[tokio::test]
async fn cart_url_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json(
            "/api/shopify/cart-url",
            json!({ "items": [
                { "shopifyId": "111", "quantity": 2 },
                { "shopifyId": 222, "quantity": 1 }
            ] }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "cartUrl": "https://shop.example.com/cart/111:2,222:1" })
    );

    Ok(())
}

/// Expect 400 in the error shape when items are missing
#[tokio::test]
async fn cart_url_rejects_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json("/api/shopify/cart-url", json!({ "products": [] })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect 401 for product sync without credentials and nothing written
#[tokio::test]
async fn sync_requires_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json(
            "/api/shopify/sync-products",
            json!({ "products": [{ "id": "111", "title": "Cuaderno", "price": 1990, "stock": 5 }] }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(test.catalog().find_product("111").await?.is_none());

    Ok(())
}

/// Expect an admin sync to upsert products and report the count
#[tokio::test]
async fn sync_upserts_products() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json_as(
            "/api/shopify/sync-products",
            TEST_ADMIN_TOKEN,
            json!({ "products": [
                { "id": 8012345678901u64, "title": "Cuaderno", "price": 1990, "stock": 5 },
                { "id": "222", "title": "Lápiz", "price": 450.5, "stock": 0 }
            ] }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "success": true, "count": 2 }));
    let product = test.catalog().find_product("8012345678901").await?.unwrap();
    assert_eq!(product.name, "Cuaderno");
    assert_eq!(product.price, 1990.0);

    Ok(())
}

/// Expect prices sent as decimal strings to be stored as numbers
#[tokio::test]
async fn sync_accepts_string_prices() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json_as(
            "/api/shopify/sync-products",
            TEST_ADMIN_TOKEN,
            json!({ "products": [
                { "id": "111", "title": "Cuaderno", "price": "1990", "stock": 5 },
                { "id": "222", "title": "Lápiz", "price": "19.99", "stock": 3 }
            ] }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "success": true, "count": 2 }));
    let product = test.catalog().find_product("111").await?.unwrap();
    assert_eq!(product.price, 1990.0);
    let product = test.catalog().find_product("222").await?.unwrap();
    assert_eq!(product.price, 19.99);

    Ok(())
}
