//! Test utilities for building the application router over a test database

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use utiles::server::{model::app::AppState, router, startup};
use utiles_test_utils::prelude::*;

/// Extension trait for TestContext to create AppState and the full router
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Full router with the session layer, as served by `main`
    fn into_app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            shopify_store_url: TEST_SHOPIFY_STORE_URL.to_string(),
            admin_token: TEST_ADMIN_TOKEN.to_string(),
        }
    }

    fn into_app(&self) -> Router {
        router::routes(self.into_app_state()).layer(startup::session_layer())
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `post_json` with `Authorization: Bearer <token>`
pub fn post_json_as(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    let mut request = post_json(uri, body);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    request
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` pair of the session cookie set by a response
pub fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response did not set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}
