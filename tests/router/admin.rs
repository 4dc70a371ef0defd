use axum::http::{header, Request};

use super::*;

/// Expect 401 without credentials on every admin route
#[tokio::test]
async fn admin_routes_require_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_school_list(1)
        .build()
        .await?;
    let app = test.into_app();

    let requests = [
        post_json(
            "/api/admin/lists",
            json!({ "name": "Lista", "description": "", "createdBy": "admin" }),
        ),
        post_json("/api/admin/lists/1/assign-comuna", json!({ "comunaId": 1 })),
        post_json(
            "/api/admin/lists/1/products",
            json!({ "shopifyProductId": "111", "quantity": 1 }),
        ),
    ];

    for request in requests {
        let resp = app.clone().oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await, json!({ "error": "Unauthorized" }));
    }

    Ok(())
}

/// Expect 401 for a wrong bearer token
#[tokio::test]
async fn wrong_bearer_token_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json_as(
            "/api/admin/lists",
            "wrong-token",
            json!({ "name": "Lista", "description": "", "createdBy": "admin" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the full admin flow to work with the bearer token
#[tokio::test]
async fn bearer_token_admin_flow() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_comuna(10, 1)
        .build()
        .await?;
    let app = test.into_app();

    let resp = app
        .clone()
        .oneshot(post_json_as(
            "/api/admin/lists",
            TEST_ADMIN_TOKEN,
            json!({ "name": "Lista 5º Básico", "description": "", "createdBy": "admin" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await;
    assert_eq!(created["description"], "");
    let list_id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(post_json_as(
            &format!("/api/admin/lists/{}/assign-comuna", list_id),
            TEST_ADMIN_TOKEN,
            json!({ "comunaId": 10 }),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!({ "success": true }));

    let resp = app
        .clone()
        .oneshot(post_json_as(
            &format!("/api/admin/lists/{}/products", list_id),
            TEST_ADMIN_TOKEN,
            json!({ "shopifyProductId": 999, "quantity": 3 }),
        ))
        .await
        .unwrap();
    let added = body_json(resp).await;
    assert_eq!(added["success"], true);
    assert!(added["productId"].is_i64());

    let resp = app
        .oneshot(get(&format!("/api/lists/{}", list_id)))
        .await
        .unwrap();
    let detail = body_json(resp).await;
    assert_eq!(detail["products"][0]["shopifyId"], "999");
    assert_eq!(detail["products"][0]["name"], "Product");
    assert_eq!(detail["products"][0]["quantity"], 3);

    Ok(())
}

/// Expect 400 when a required field is missing from the body
#[tokio::test]
async fn create_list_missing_field_returns_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json_as(
            "/api/admin/lists",
            TEST_ADMIN_TOKEN,
            json!({ "name": "Lista" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect a session login to authorize admin routes until logout
#[tokio::test]
async fn session_login_authorizes_admin_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = test.into_app();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/admin/session",
            json!({ "token": TEST_ADMIN_TOKEN }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);

    let mut request = post_json(
        "/api/admin/lists",
        json!({ "name": "Lista", "description": "", "createdBy": "admin" }),
    );
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let logout = Request::builder()
        .method("DELETE")
        .uri("/api/admin/session")
        .header(header::COOKIE, &cookie)
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(logout).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let mut request = post_json(
        "/api/admin/lists",
        json!({ "name": "Lista", "description": "", "createdBy": "admin" }),
    );
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    let resp = app.oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 and no session cookie for a wrong login token
#[tokio::test]
async fn session_login_rejects_wrong_token() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .into_app()
        .oneshot(post_json("/api/admin/session", json!({ "token": "nope" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    Ok(())
}

/// Expect login to issue a fresh session id and retire the id the client arrived with
#[tokio::test]
async fn session_login_issues_new_session_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = test.into_app();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/admin/session",
            json!({ "token": TEST_ADMIN_TOKEN }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first_cookie = session_cookie(&resp);

    let mut login = post_json("/api/admin/session", json!({ "token": TEST_ADMIN_TOKEN }));
    login
        .headers_mut()
        .insert(header::COOKIE, first_cookie.parse().unwrap());
    let resp = app.clone().oneshot(login).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let second_cookie = session_cookie(&resp);
    assert_ne!(first_cookie, second_cookie);

    let create_list = |cookie: &str| {
        let mut request = post_json(
            "/api/admin/lists",
            json!({ "name": "Lista", "description": "", "createdBy": "admin" }),
        );
        request
            .headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
        request
    };

    let resp = app.clone().oneshot(create_list(&first_cookie)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let resp = app.oneshot(create_list(&second_cookie)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
