use super::*;

/// Expect status ok with a timestamp
#[tokio::test]
async fn health_reports_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test.into_app().oneshot(get("/api/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());

    Ok(())
}

/// Expect the region, commune and list endpoints to chain together
#[tokio::test]
async fn browses_region_to_list_detail() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog().insert_region(13, "Metropolitana").await?;
    test.catalog().insert_comuna(1, 13, "Ñuñoa").await?;
    test.catalog().insert_school_list(1, "Lista 1º Básico").await?;
    test.catalog().insert_list_assignment(1, 1).await?;
    test.catalog().insert_list_product(1, "111", 2).await?;
    let app = test.into_app();

    let resp = app.clone().oneshot(get("/api/regions")).await.unwrap();
    assert_eq!(
        body_json(resp).await,
        json!([{ "id": 13, "name": "Metropolitana" }])
    );

    let resp = app
        .clone()
        .oneshot(get("/api/regions/13/comunas"))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!([{ "id": 1, "name": "Ñuñoa", "regionId": 13 }])
    );

    let resp = app.clone().oneshot(get("/api/comunas/1/lists")).await.unwrap();
    let lists = body_json(resp).await;
    assert_eq!(lists.as_array().unwrap().len(), 1);
    assert_eq!(lists[0]["name"], "Lista 1º Básico");
    assert_eq!(lists[0]["description"], "Test description");

    let resp = app.oneshot(get("/api/lists/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail = body_json(resp).await;
    assert_eq!(detail["name"], "Lista 1º Básico");
    assert_eq!(
        detail["products"],
        json!([{
            "id": 1,
            "shopifyId": "111",
            "name": "Cuaderno 111",
            "price": 1990.0,
            "stock": 25,
            "quantity": 2
        }])
    );

    Ok(())
}

/// Expect 404 with the list not found message
#[tokio::test]
async fn missing_list_returns_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .into_app()
        .oneshot(get("/api/lists/99999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "List not found" }));

    Ok(())
}

/// Expect 400 with an error body for a non-numeric list ID
#[tokio::test]
async fn non_numeric_list_id_returns_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test.into_app().oneshot(get("/api/lists/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect 500 with a generic message when the database is not set up
#[tokio::test]
async fn database_failure_returns_generic_500() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test.into_app().oneshot(get("/api/regions")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Internal server error" })
    );

    Ok(())
}

/// Expect the OpenAPI document to list both public and admin routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .into_app()
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/api/lists/{listId}"].is_object());
    assert!(doc["paths"]["/api/admin/lists"].is_object());

    Ok(())
}
